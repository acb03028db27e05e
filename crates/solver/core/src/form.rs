//! Text-form adapter.
//!
//! Instance-editing front ends collect Level, CP, and IVs as free text. This
//! module turns that text into a [`ValidationRequest`] (blank means unknown)
//! and merges a successful verdict back into a complete record.

use crate::error::{InputField, StatError};
use crate::level::Level;
use crate::solver::{Computed, Field, FieldErrors, StatSolver, ValidationRequest, ValidationResult};
use crate::stats::{BaseStats, IvInput, IvTriple};
use crate::table::MultiplierTable;

/// Raw text of the stat fields on an edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormInput {
    pub level: String,
    pub cp: String,
    pub attack: String,
    pub defense: String,
    pub stamina: String,
}

impl FormInput {
    /// Parses the text fields.
    ///
    /// Blank fields become absent values. Text that is not a number is
    /// reported under the field it belongs to.
    pub fn parse(&self) -> Result<ValidationRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let level = parse_field::<f64>(&self.level, InputField::Level)
            .unwrap_or_else(|error| {
                errors.report(Field::Level, error);
                None
            });
        let cp = parse_field::<i64>(&self.cp, InputField::Cp).unwrap_or_else(|error| {
            errors.report(Field::Cp, error);
            None
        });

        let mut iv = |text: &str, field: InputField| {
            parse_field::<i64>(text, field).unwrap_or_else(|error| {
                errors.report(Field::Ivs, error);
                None
            })
        };
        let ivs = IvInput::new(
            iv(&self.attack, InputField::Attack),
            iv(&self.defense, InputField::Defense),
            iv(&self.stamina, InputField::Stamina),
        );

        if errors.is_empty() {
            Ok(ValidationRequest { level, cp, ivs })
        } else {
            Err(errors)
        }
    }

    /// Parses and validates in one step, as done when the user leaves edit mode.
    pub fn validate<T: MultiplierTable>(
        &self,
        solver: &StatSolver<T>,
        base: BaseStats,
    ) -> ValidationResult {
        match self.parse() {
            Ok(request) => solver.validate(&request, base),
            Err(errors) => ValidationResult {
                errors,
                computed: Computed::default(),
            },
        }
    }
}

fn parse_field<T: core::str::FromStr>(
    text: &str,
    field: InputField,
) -> Result<Option<T>, StatError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<T>()
        .map(Some)
        .map_err(|_| StatError::NotANumber {
            field,
            input: text.to_string(),
        })
}

/// Stat fields of an instance after a successful validation.
///
/// A field stays `None` only when neither the caller nor the solver knew it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceStats {
    pub level: Option<Level>,
    pub cp: Option<u32>,
    pub ivs: Option<IvTriple>,
}

impl InstanceStats {
    /// Merges caller-supplied values with the solver's computed values.
    ///
    /// Fails with the verdict's errors if validation did not succeed.
    pub fn merge(
        request: &ValidationRequest,
        result: ValidationResult,
    ) -> Result<Self, FieldErrors> {
        let computed = result.into_result()?;

        let given_ivs = IvTriple::try_from(request.ivs).ok();
        Ok(Self {
            level: request.level.and_then(Level::from_f64).or(computed.level),
            cp: request
                .cp
                .and_then(|cp| u32::try_from(cp).ok())
                .or(computed.cp),
            ivs: given_ivs.or(computed.ivs),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.level.is_some() && self.cp.is_some() && self.ivs.is_some()
    }

    /// Renders the stats back into form text.
    pub fn to_form(&self) -> FormInput {
        let text = |value: Option<String>| value.unwrap_or_default();
        FormInput {
            level: text(self.level.map(|level| level.to_string())),
            cp: text(self.cp.map(|cp| cp.to_string())),
            attack: text(self.ivs.map(|ivs| ivs.attack().to_string())),
            defense: text(self.ivs.map(|ivs| ivs.defense().to_string())),
            stamina: text(self.ivs.map(|ivs| ivs.stamina().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, SolverError};

    const BASE: BaseStats = BaseStats::new(198, 189, 190);

    fn form(level: &str, cp: &str, attack: &str, defense: &str, stamina: &str) -> FormInput {
        FormInput {
            level: level.into(),
            cp: cp.into(),
            attack: attack.into(),
            defense: defense.into(),
            stamina: stamina.into(),
        }
    }

    #[test]
    fn blank_fields_are_absent() {
        let request = form(" 25 ", "1943", "", " ", "").parse().unwrap();
        assert_eq!(request.level, Some(25.0));
        assert_eq!(request.cp, Some(1943));
        assert!(request.ivs.is_empty());

        assert!(FormInput::default().parse().unwrap().is_empty());
    }

    #[test]
    fn garbage_is_reported_per_field() {
        let errors = form("twenty", "1943", "15", "x", "15").parse().unwrap_err();
        assert_eq!(
            errors.level,
            Some(StatError::NotANumber {
                field: InputField::Level,
                input: "twenty".into()
            })
        );
        assert_eq!(errors.ivs.as_ref().map(SolverError::kind), Some(ErrorKind::Range));
        assert_eq!(errors.cp, None);
        assert_eq!(
            errors.ivs.unwrap().to_string(),
            "Defense IV must be a number, got \"x\""
        );
    }

    #[test]
    fn commit_fills_in_ivs() {
        let input = form("25", "1943", "", "", "");
        let request = input.parse().unwrap();
        let result = input.validate(&StatSolver::standard(), BASE);

        let stats = InstanceStats::merge(&request, result).unwrap();
        assert!(stats.is_complete());
        assert_eq!(stats.ivs, Some(IvTriple::PERFECT));
        assert_eq!(stats.to_form(), form("25", "1943", "15", "15", "15"));
    }

    #[test]
    fn commit_fills_in_half_level() {
        let ivs = IvTriple::new(4, 0, 0).unwrap();
        let cp = crate::formula::cp_at_level(
            &crate::table::StandardMultipliers,
            BASE,
            ivs,
            Level::from_f64(30.5).unwrap(),
        )
        .unwrap();

        let input = form("", &cp.to_string(), "4", "0", "0");
        let request = input.parse().unwrap();
        let stats =
            InstanceStats::merge(&request, input.validate(&StatSolver::standard(), BASE)).unwrap();
        assert_eq!(stats.level.map(|level| level.to_string()), Some("30.5".into()));
    }

    #[test]
    fn failed_commit_does_not_merge() {
        let input = form("20", "", "", "", "");
        let request = input.parse().unwrap();
        let result = input.validate(&StatSolver::standard(), BASE);
        let errors = InstanceStats::merge(&request, result).unwrap_err();
        assert!(errors.general.is_some());
    }
}
