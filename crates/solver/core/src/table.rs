//! CP multiplier tables.
//!
//! The multiplier is the only level-dependent input to the CP formula. Tables
//! are read-only reference data exposed through [`MultiplierTable`], so the
//! solver can run against the built-in table or one loaded for a different
//! game version.

use crate::error::TableError;
use crate::level::Level;

/// A single `Level -> multiplier` entry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multiplier {
    pub level: Level,
    pub value: f64,
}

impl Multiplier {
    pub const fn new(level: Level, value: f64) -> Self {
        Self { level, value }
    }
}

/// Read-only source of level multipliers.
///
/// Implementations must list entries in ascending level order with strictly
/// increasing multipliers.
pub trait MultiplierTable: Send + Sync {
    /// Every entry, ascending by level.
    fn entries(&self) -> &[Multiplier];

    /// Returns the entry for `level`, or `None` if the table does not cover it.
    fn entry(&self, level: Level) -> Option<Multiplier> {
        self.entries().iter().find(|entry| entry.level == level).copied()
    }

    fn multiplier(&self, level: Level) -> Option<f64> {
        self.entry(level).map(|entry| entry.value)
    }

    fn min_level(&self) -> Level {
        self.entries().first().map_or(Level::MIN, |entry| entry.level)
    }

    fn max_level(&self) -> Level {
        self.entries().last().map_or(Level::MAX, |entry| entry.level)
    }
}

/// Published multipliers for every rung from level 1 to 51.
const STANDARD_VALUES: [f64; Level::COUNT] = [
    0.094, 0.1351374318, 0.16639787, 0.192650919, 0.21573247, // 1 - 3
    0.2365726613, 0.25572005, 0.2735303812, 0.29024988, 0.3060573775, // 3.5 - 5.5
    0.3210876, 0.3354450362, 0.34921268, 0.3624577511, 0.3752356, // 6 - 8
    0.387592416, 0.39956728, 0.4111935514, 0.4225, 0.4329264091, // 8.5 - 10.5
    0.44310755, 0.4530599591, 0.46279839, 0.472336093, 0.48168495, // 11 - 13
    0.4908558003, 0.49985844, 0.508701765, 0.51739395, 0.5259425113, // 13.5 - 15.5
    0.53435433, 0.5426357375, 0.55079269, 0.5588305862, 0.56675452, // 16 - 18
    0.5745691333, 0.58227891, 0.5898879072, 0.59740001, 0.6048236651, // 18.5 - 20.5
    0.61215729, 0.6194041216, 0.62656713, 0.6336491432, 0.64065295, // 21 - 23
    0.6475809666, 0.65443563, 0.6612192524, 0.667934, 0.6745818959, // 23.5 - 25.5
    0.68116492, 0.6876849038, 0.69414365, 0.70054287, 0.70688421, // 26 - 28
    0.7131691091, 0.71939909, 0.7255756136, 0.7317, 0.7347410093, // 28.5 - 30.5
    0.73776948, 0.7407855938, 0.74378943, 0.7467812109, 0.74976104, // 31 - 33
    0.7527290867, 0.75568551, 0.7586303683, 0.76156384, 0.7644860647, // 33.5 - 35.5
    0.76739717, 0.7702972656, 0.7731865, 0.7760649616, 0.77893275, // 36 - 38
    0.7817900548, 0.784637, 0.7874736075, 0.7903, 0.792803968, // 38.5 - 40.5
    0.79530001, 0.797800015, 0.8003, 0.802799995, 0.8053, // 41 - 43
    0.8078, 0.81029999, 0.812799985, 0.81529999, 0.81779999, // 43.5 - 45.5
    0.82029999, 0.82279999, 0.82529999, 0.82779999, 0.83029999, // 46 - 48
    0.83279999, 0.83529999, 0.83779999, 0.84029999, 0.84279999, // 48.5 - 50.5
    0.84529999, // 51
];

const fn standard_entries() -> [Multiplier; Level::COUNT] {
    let mut entries = [Multiplier::new(Level::MIN, 0.0); Level::COUNT];
    let mut index = 0;
    while index < Level::COUNT {
        let level = match Level::from_index(index) {
            Some(level) => level,
            None => panic!("ladder index out of range"),
        };
        entries[index] = Multiplier::new(level, STANDARD_VALUES[index]);
        index += 1;
    }
    entries
}

static STANDARD_ENTRIES: [Multiplier; Level::COUNT] = standard_entries();

/// The built-in multiplier table covering the full ladder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardMultipliers;

impl MultiplierTable for StandardMultipliers {
    fn entries(&self) -> &[Multiplier] {
        &STANDARD_ENTRIES
    }

    fn entry(&self, level: Level) -> Option<Multiplier> {
        STANDARD_ENTRIES.get(level.index()).copied()
    }
}

/// Looks up the standard multiplier for a raw level value.
///
/// Returns `None` for values off the ladder.
pub fn multiplier_for(level: f64) -> Option<f64> {
    Level::from_f64(level).and_then(|level| StandardMultipliers.multiplier(level))
}

/// A validated, owned multiplier table.
///
/// May cover any ascending subset of the ladder (for example capping at 50).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Multiplier>", into = "Vec<Multiplier>"))]
pub struct CustomMultipliers {
    entries: Vec<Multiplier>,
}

impl CustomMultipliers {
    pub fn new(entries: Vec<Multiplier>) -> Result<Self, TableError> {
        let Some(first) = entries.first() else {
            return Err(TableError::Empty);
        };
        check_value(first)?;

        for pair in entries.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            check_value(current)?;
            if current.level == previous.level {
                return Err(TableError::DuplicateLevel(current.level));
            }
            if current.level < previous.level {
                return Err(TableError::LevelsOutOfOrder {
                    previous: previous.level,
                    level: current.level,
                });
            }
            if current.value <= previous.value {
                return Err(TableError::NotIncreasing {
                    level: current.level,
                    value: current.value,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Copies the entries of another table up to and including `max`.
    pub fn capped<T: MultiplierTable + ?Sized>(table: &T, max: Level) -> Result<Self, TableError> {
        Self::new(
            table
                .entries()
                .iter()
                .copied()
                .filter(|entry| entry.level <= max)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_value(entry: &Multiplier) -> Result<(), TableError> {
    if entry.value.is_finite() && entry.value > 0.0 {
        Ok(())
    } else {
        Err(TableError::InvalidMultiplier {
            level: entry.level,
            value: entry.value,
        })
    }
}

impl MultiplierTable for CustomMultipliers {
    fn entries(&self) -> &[Multiplier] {
        &self.entries
    }
}

impl TryFrom<Vec<Multiplier>> for CustomMultipliers {
    type Error = TableError;

    fn try_from(entries: Vec<Multiplier>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<CustomMultipliers> for Vec<Multiplier> {
    fn from(table: CustomMultipliers) -> Self {
        table.entries
    }
}
