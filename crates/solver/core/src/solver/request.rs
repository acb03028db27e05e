use arrayvec::ArrayVec;

use crate::level::Level;
use crate::stats::{IvInput, IvTriple};

/// The three reconcilable quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    #[strum(serialize = "Level")]
    Level,
    #[strum(serialize = "CP")]
    Cp,
    #[strum(serialize = "IVs")]
    Ivs,
}

/// Caller-supplied subset of Level, CP, and IVs.
///
/// Values are kept raw so the solver can report out-of-range input.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationRequest {
    pub level: Option<f64>,
    pub cp: Option<i64>,
    pub ivs: IvInput,
}

impl ValidationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, level: f64) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_cp(mut self, cp: i64) -> Self {
        self.cp = Some(cp);
        self
    }

    #[must_use]
    pub fn with_ivs(mut self, attack: i64, defense: i64, stamina: i64) -> Self {
        self.ivs = IvInput::new(Some(attack), Some(defense), Some(stamina));
        self
    }

    #[must_use]
    pub fn with_iv_input(mut self, ivs: IvInput) -> Self {
        self.ivs = ivs;
        self
    }

    /// Builds a request from already-typed values.
    pub fn from_known(level: Option<Level>, cp: Option<u32>, ivs: Option<IvTriple>) -> Self {
        Self {
            level: level.map(Level::as_f64),
            cp: cp.map(i64::from),
            ivs: ivs.map(IvInput::from).unwrap_or_default(),
        }
    }

    /// Fields the caller filled in, in `Level, CP, IVs` order.
    ///
    /// IVs count as given as soon as any component is.
    pub fn given(&self) -> ArrayVec<Field, 3> {
        let mut given = ArrayVec::new();
        if self.level.is_some() {
            given.push(Field::Level);
        }
        if self.cp.is_some() {
            given.push(Field::Cp);
        }
        if !self.ivs.is_empty() {
            given.push(Field::Ivs);
        }
        given
    }

    pub fn is_empty(&self) -> bool {
        self.given().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_tracks_filled_fields() {
        assert!(ValidationRequest::new().is_empty());

        let request = ValidationRequest::new().with_cp(500);
        assert_eq!(request.given().as_slice(), &[Field::Cp]);

        let request = ValidationRequest::new()
            .with_level(20.0)
            .with_iv_input(IvInput::new(None, Some(3), None));
        assert_eq!(request.given().as_slice(), &[Field::Level, Field::Ivs]);
    }

    #[test]
    fn from_known_widens_values() {
        let level = Level::from_f64(30.5).unwrap();
        let request = ValidationRequest::from_known(Some(level), Some(2215), None);
        assert_eq!(request.level, Some(30.5));
        assert_eq!(request.cp, Some(2215));
        assert!(request.ivs.is_empty());
    }
}
