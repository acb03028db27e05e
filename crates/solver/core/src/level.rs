//! The level ladder.
//!
//! Levels run from 1 to 51 in half-level steps (101 rungs). A [`Level`] can only
//! be built for a rung on this ladder, so every `Level` indexes the standard
//! multiplier table directly.

use core::str::FromStr;

/// A creature level on the half-step ladder.
///
/// Stored as the number of half levels, so `Level 25.5` is `51`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Level(u8);

impl Level {
    const MIN_HALF_STEPS: u8 = 2;
    const MAX_HALF_STEPS: u8 = 102;

    pub const MIN: Self = Self(Self::MIN_HALF_STEPS);
    pub const MAX: Self = Self(Self::MAX_HALF_STEPS);
    /// Number of rungs on the ladder.
    pub const COUNT: usize = (Self::MAX_HALF_STEPS - Self::MIN_HALF_STEPS) as usize + 1;

    /// Returns the level for `value`, or `None` if it is not on the ladder.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let doubled = value * 2.0;
        if doubled.fract() != 0.0
            || doubled < f64::from(Self::MIN_HALF_STEPS)
            || doubled > f64::from(Self::MAX_HALF_STEPS)
        {
            return None;
        }
        Some(Self(doubled as u8))
    }

    /// Returns the rung at `index` (0 is level 1).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        Some(Self(Self::MIN_HALF_STEPS + index as u8))
    }

    pub const fn index(self) -> usize {
        (self.0 - Self::MIN_HALF_STEPS) as usize
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    pub const fn is_half(self) -> bool {
        self.0 % 2 == 1
    }

    /// The next rung up, if any.
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Every rung in ascending order.
    pub fn ladder() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator + Clone {
        (Self::MIN_HALF_STEPS..=Self::MAX_HALF_STEPS).map(Self)
    }
}

impl core::fmt::Display for Level {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let whole = self.0 / 2;
        if self.is_half() {
            write!(f, "{whole}.5")
        } else {
            write!(f, "{whole}")
        }
    }
}

/// Error for values that are not on the ladder.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{0} is not a level (expected 1 to 51 in half-level steps)")]
pub struct LevelError(pub String);

impl TryFrom<f64> for Level {
    type Error = LevelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value).ok_or_else(|| LevelError(value.to_string()))
    }
}

impl From<Level> for f64 {
    fn from(level: Level) -> Self {
        level.as_f64()
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::from_f64)
            .ok_or_else(|| LevelError(s.to_string()))
    }
}
