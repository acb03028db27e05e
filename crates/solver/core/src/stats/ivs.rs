use core::str::FromStr;

use arrayvec::ArrayVec;
use strum::IntoEnumIterator;

use crate::config::SolverConfig;

/// The three stats that carry individual values.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Attack,
    Defense,
    Stamina,
}

/// Concrete individual values, each in `[0, 15]`.
///
/// Only constructible through checked constructors, so any `IvTriple` is
/// always safe to feed into the CP formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "IvInput", into = "IvInput"))]
pub struct IvTriple {
    pub(crate) attack: u8,
    pub(crate) defense: u8,
    pub(crate) stamina: u8,
}

impl IvTriple {
    pub const ZERO: Self = Self {
        attack: 0,
        defense: 0,
        stamina: 0,
    };

    pub const PERFECT: Self = Self {
        attack: SolverConfig::IV_MAX,
        defense: SolverConfig::IV_MAX,
        stamina: SolverConfig::IV_MAX,
    };

    /// Returns `None` if any component exceeds the IV maximum.
    pub const fn new(attack: u8, defense: u8, stamina: u8) -> Option<Self> {
        if attack > SolverConfig::IV_MAX
            || defense > SolverConfig::IV_MAX
            || stamina > SolverConfig::IV_MAX
        {
            return None;
        }
        Some(Self {
            attack,
            defense,
            stamina,
        })
    }

    pub const fn attack(&self) -> u8 {
        self.attack
    }

    pub const fn defense(&self) -> u8 {
        self.defense
    }

    pub const fn stamina(&self) -> u8 {
        self.stamina
    }

    pub const fn get(&self, stat: StatKind) -> u8 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Stamina => self.stamina,
        }
    }

    /// Every possible triple, attack-major, starting at `0/0/0`.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        let per_stat = SolverConfig::IV_VALUES;
        (0..SolverConfig::IV_COMBINATIONS).map(move |index| Self {
            attack: (index / (per_stat * per_stat)) as u8,
            defense: ((index / per_stat) % per_stat) as u8,
            stamina: (index % per_stat) as u8,
        })
    }

    /// Percentage of the maximum IV total, rounded down.
    pub const fn percent(&self) -> u8 {
        let total = self.attack as u32 + self.defense as u32 + self.stamina as u32;
        (total * 100 / (SolverConfig::IV_MAX as u32 * 3)) as u8
    }
}

impl core::fmt::Display for IvTriple {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}/{}", self.attack, self.defense, self.stamina)
    }
}

/// Errors from parsing `A/D/S` notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IvParseError {
    #[error("expected three IVs written as attack/defense/stamina, got \"{0}\"")]
    Shape(String),

    #[error("{stat} IV \"{input}\" is not a whole number between 0 and 15")]
    Value { stat: StatKind, input: String },
}

impl FromStr for IvTriple {
    type Err = IvParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').map(str::trim).collect();
        let &[attack, defense, stamina] = parts.as_slice() else {
            return Err(IvParseError::Shape(s.to_string()));
        };

        let parse = |stat: StatKind, input: &str| {
            input
                .parse::<u8>()
                .ok()
                .filter(|value| *value <= SolverConfig::IV_MAX)
                .ok_or_else(|| IvParseError::Value {
                    stat,
                    input: input.to_string(),
                })
        };

        Ok(Self {
            attack: parse(StatKind::Attack, attack)?,
            defense: parse(StatKind::Defense, defense)?,
            stamina: parse(StatKind::Stamina, stamina)?,
        })
    }
}

/// Individual values as entered by a user.
///
/// Components are raw integers so that out-of-range input can be reported
/// rather than rejected at the type level. `None` means unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IvInput {
    pub attack: Option<i64>,
    pub defense: Option<i64>,
    pub stamina: Option<i64>,
}

impl IvInput {
    pub const fn new(attack: Option<i64>, defense: Option<i64>, stamina: Option<i64>) -> Self {
        Self {
            attack,
            defense,
            stamina,
        }
    }

    pub const fn get(&self, stat: StatKind) -> Option<i64> {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Stamina => self.stamina,
        }
    }

    /// No component was given.
    pub const fn is_empty(&self) -> bool {
        self.attack.is_none() && self.defense.is_none() && self.stamina.is_none()
    }

    /// Every component was given (not necessarily in range).
    pub const fn is_complete(&self) -> bool {
        self.attack.is_some() && self.defense.is_some() && self.stamina.is_some()
    }

    /// Stats whose component is unknown.
    pub fn missing(&self) -> ArrayVec<StatKind, 3> {
        StatKind::iter()
            .filter(|stat| self.get(*stat).is_none())
            .collect()
    }
}

impl From<IvTriple> for IvInput {
    fn from(ivs: IvTriple) -> Self {
        Self {
            attack: Some(ivs.attack.into()),
            defense: Some(ivs.defense.into()),
            stamina: Some(ivs.stamina.into()),
        }
    }
}

impl TryFrom<IvInput> for IvTriple {
    type Error = IvParseError;

    fn try_from(input: IvInput) -> Result<Self, Self::Error> {
        let component = |stat: StatKind| {
            let value = input.get(stat);
            value
                .and_then(|v| u8::try_from(v).ok())
                .filter(|v| *v <= SolverConfig::IV_MAX)
                .ok_or_else(|| IvParseError::Value {
                    stat,
                    input: value.map(|v| v.to_string()).unwrap_or_default(),
                })
        };

        Ok(Self {
            attack: component(StatKind::Attack)?,
            defense: component(StatKind::Defense)?,
            stamina: component(StatKind::Stamina)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_triple_once() {
        let triples: Vec<_> = IvTriple::all().collect();
        assert_eq!(triples.len(), 4096);
        assert_eq!(triples.first(), Some(&IvTriple::ZERO));
        assert_eq!(triples.last(), Some(&IvTriple::PERFECT));

        let mut sorted = triples.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 4096);
    }

    #[test]
    fn new_rejects_values_above_fifteen() {
        assert!(IvTriple::new(15, 15, 15).is_some());
        assert!(IvTriple::new(16, 0, 0).is_none());
        assert!(IvTriple::new(0, 0, 200).is_none());
    }

    #[test]
    fn parse_slash_notation() {
        let ivs: IvTriple = "15/ 0 /7".parse().unwrap();
        assert_eq!(ivs, IvTriple::new(15, 0, 7).unwrap());
        assert_eq!(ivs.to_string(), "15/0/7");

        assert!(matches!("15/15".parse::<IvTriple>(), Err(IvParseError::Shape(_))));
        assert!(matches!(
            "15/16/0".parse::<IvTriple>(),
            Err(IvParseError::Value {
                stat: StatKind::Defense,
                ..
            })
        ));
    }

    #[test]
    fn percent_of_perfect() {
        assert_eq!(IvTriple::PERFECT.percent(), 100);
        assert_eq!(IvTriple::ZERO.percent(), 0);
        assert_eq!(IvTriple::new(15, 15, 0).unwrap().percent(), 66);
    }

    #[test]
    fn input_reports_missing_components() {
        let input = IvInput::new(Some(3), None, Some(20));
        assert!(!input.is_empty());
        assert!(!input.is_complete());
        assert_eq!(input.missing().as_slice(), &[StatKind::Defense]);
        assert!(IvInput::default().is_empty());
    }

    #[test]
    fn input_converts_only_when_in_range() {
        let complete = IvInput::from(IvTriple::new(1, 2, 3).unwrap());
        assert_eq!(IvTriple::try_from(complete), Ok(IvTriple::new(1, 2, 3).unwrap()));

        let negative = IvInput::new(Some(-1), Some(0), Some(0));
        assert!(IvTriple::try_from(negative).is_err());
    }
}
