use crate::error::StatError;
use crate::level::Level;
use crate::stats::IvTriple;

use super::request::Field;

/// Validation errors keyed by the field they concern.
///
/// `general` carries failures that are not about a single field.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldErrors {
    pub level: Option<StatError>,
    pub cp: Option<StatError>,
    pub ivs: Option<StatError>,
    pub general: Option<StatError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn get(&self, field: Field) -> Option<&StatError> {
        match field {
            Field::Level => self.level.as_ref(),
            Field::Cp => self.cp.as_ref(),
            Field::Ivs => self.ivs.as_ref(),
        }
    }

    /// Records `error` for `field` unless that slot is already taken.
    pub(crate) fn report(&mut self, field: Field, error: StatError) {
        let slot = match field {
            Field::Level => &mut self.level,
            Field::Cp => &mut self.cp,
            Field::Ivs => &mut self.ivs,
        };
        slot.get_or_insert(error);
    }

    /// Slot names and errors, in `level, cp, ivs, general` order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StatError)> {
        [
            ("level", &self.level),
            ("cp", &self.cp),
            ("ivs", &self.ivs),
            ("general", &self.general),
        ]
        .into_iter()
        .filter_map(|(name, error)| error.as_ref().map(|error| (name, error)))
    }

    pub fn messages(&self) -> Vec<String> {
        self.iter().map(|(_, error)| error.to_string()).collect()
    }

    /// All messages in one string, as shown in a single alert.
    pub fn joined(&self, separator: &str) -> String {
        self.messages().join(separator)
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.joined("\n"))
    }
}

/// Values the solver derived. Caller-supplied fields are never echoed here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Computed {
    pub level: Option<Level>,
    pub cp: Option<u32>,
    pub ivs: Option<IvTriple>,
}

impl Computed {
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.cp.is_none() && self.ivs.is_none()
    }
}

/// Verdict of one validation call.
///
/// When `errors` is non-empty, `computed` is empty.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    pub errors: FieldErrors,
    pub computed: Computed,
}

impl ValidationResult {
    pub(crate) fn failed(errors: FieldErrors) -> Self {
        Self {
            errors,
            computed: Computed::default(),
        }
    }

    pub(crate) fn failed_on(field: Field, error: StatError) -> Self {
        let mut errors = FieldErrors::default();
        errors.report(field, error);
        Self::failed(errors)
    }

    pub(crate) fn computed(computed: Computed) -> Self {
        Self {
            errors: FieldErrors::default(),
            computed,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Computed, FieldErrors> {
        if self.errors.is_empty() {
            Ok(self.computed)
        } else {
            Err(self.errors)
        }
    }
}
