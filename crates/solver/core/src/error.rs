//! Error infrastructure for solver-core.
//!
//! Validation failures are data, not control flow: the solver collects
//! [`StatError`] values into a [`crate::FieldErrors`] and always returns a
//! result. [`TableError`] is the only error surfaced through `Result`, raised
//! when a custom multiplier table is malformed.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure mode has its own variant with the values involved
//! - **Classification**: Every variant maps to one [`ErrorKind`]
//! - **Stable Codes**: `error_code()` strings are safe to match on in front ends

use arrayvec::ArrayVec;

use crate::config::SolverConfig;
use crate::level::Level;
use crate::stats::{IvTriple, StatKind};

/// Classification of validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A scalar value lies outside its valid domain.
    #[strum(serialize = "range")]
    Range,

    /// More than one IV triple or level satisfies the given CP.
    #[strum(serialize = "ambiguous-inference")]
    AmbiguousInference,

    /// No candidate satisfies the given CP.
    #[strum(serialize = "no-solution")]
    NoSolution,

    /// All three quantities were given but they disagree.
    #[strum(serialize = "inconsistent-input")]
    InconsistentInput,

    /// Fewer than two of Level, CP, and IVs were given.
    #[strum(serialize = "insufficient-input")]
    InsufficientInput,
}

impl ErrorKind {
    /// Returns true if the failure came from a search rather than a range check.
    pub const fn is_inference(&self) -> bool {
        matches!(self, Self::AmbiguousInference | Self::NoSolution)
    }
}

/// Common trait for all solver errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify each variant with exactly one [`ErrorKind`]
pub trait SolverError: core::fmt::Display + core::fmt::Debug {
    /// Returns the classification of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// User-facing input fields, used when raw text cannot be read as a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputField {
    #[strum(serialize = "Level")]
    Level,
    #[strum(serialize = "CP")]
    Cp,
    #[strum(serialize = "Attack IV")]
    Attack,
    #[strum(serialize = "Defense IV")]
    Defense,
    #[strum(serialize = "Stamina IV")]
    Stamina,
}

impl From<StatKind> for InputField {
    fn from(stat: StatKind) -> Self {
        match stat {
            StatKind::Attack => Self::Attack,
            StatKind::Defense => Self::Defense,
            StatKind::Stamina => Self::Stamina,
        }
    }
}

/// A single validation failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatError {
    /// Text in a form field is not a number.
    #[error("{field} must be a number, got \"{input}\"")]
    NotANumber { field: InputField, input: String },

    /// Level is not on the ladder or not covered by the multiplier table.
    #[error("Level {value} is not valid (expected {min} to {max} in half-level steps)")]
    LevelOutOfRange { value: f64, min: Level, max: Level },

    /// CP must be positive.
    #[error("CP must be greater than 0, got {value}")]
    CpOutOfRange { value: i64 },

    /// A single IV lies outside `[0, 15]`.
    #[error(
        "{stat} IV must be between {} and {}, got {value}",
        SolverConfig::IV_MIN,
        SolverConfig::IV_MAX
    )]
    IvOutOfRange { stat: StatKind, value: i64 },

    /// Some, but not all, IV components were given.
    #[error("IVs are incomplete, missing {}", join(.missing))]
    IncompleteIvs { missing: ArrayVec<StatKind, 3> },

    /// Search A found no IV triple.
    #[error(
        "No IV combination matches CP {cp} at level {level} (CP at this level ranges from {min_cp} to {max_cp})"
    )]
    NoIvMatch {
        level: Level,
        cp: u32,
        min_cp: u32,
        max_cp: u32,
    },

    /// Search A found several IV triples.
    #[error(
        "Multiple IV combinations ({count}) match CP {cp} at level {level} (e.g. {}), please specify IVs",
        join(.sample)
    )]
    AmbiguousIvs {
        level: Level,
        cp: u32,
        count: usize,
        sample: ArrayVec<IvTriple, { SolverConfig::AMBIGUITY_SAMPLE }>,
    },

    /// Search B found no level.
    #[error("No level matches CP {cp} with IVs {ivs}")]
    NoLevelMatch { cp: u32, ivs: IvTriple },

    /// Search B found several levels.
    #[error(
        "Multiple levels ({count}) match CP {cp} with IVs {ivs} (e.g. {}), please specify Level",
        join(.sample)
    )]
    AmbiguousLevels {
        cp: u32,
        ivs: IvTriple,
        count: usize,
        sample: ArrayVec<Level, { SolverConfig::AMBIGUITY_SAMPLE }>,
    },

    /// Level and IVs produce a different CP than the one provided.
    #[error("Provided CP {provided} does not match calculated CP {calculated} for level {level} with IVs {ivs}")]
    CpMismatch {
        provided: u32,
        calculated: u32,
        level: Level,
        ivs: IvTriple,
    },

    /// Exactly one of Level, CP, and IVs was given.
    #[error("Provide at least two of Level, CP, and IVs (only {given} was given)")]
    InsufficientInput { given: crate::solver::Field },
}

impl SolverError for StatError {
    fn kind(&self) -> ErrorKind {
        use StatError::*;
        match self {
            NotANumber { .. } | LevelOutOfRange { .. } | CpOutOfRange { .. } => ErrorKind::Range,
            IvOutOfRange { .. } | IncompleteIvs { .. } => ErrorKind::Range,
            AmbiguousIvs { .. } | AmbiguousLevels { .. } => ErrorKind::AmbiguousInference,
            NoIvMatch { .. } | NoLevelMatch { .. } => ErrorKind::NoSolution,
            CpMismatch { .. } => ErrorKind::InconsistentInput,
            InsufficientInput { .. } => ErrorKind::InsufficientInput,
        }
    }

    fn error_code(&self) -> &'static str {
        use StatError::*;
        match self {
            NotANumber { .. } => "STAT_NOT_A_NUMBER",
            LevelOutOfRange { .. } => "STAT_LEVEL_OUT_OF_RANGE",
            CpOutOfRange { .. } => "STAT_CP_OUT_OF_RANGE",
            IvOutOfRange { .. } => "STAT_IV_OUT_OF_RANGE",
            IncompleteIvs { .. } => "STAT_IVS_INCOMPLETE",
            NoIvMatch { .. } => "STAT_NO_IV_MATCH",
            AmbiguousIvs { .. } => "STAT_AMBIGUOUS_IVS",
            NoLevelMatch { .. } => "STAT_NO_LEVEL_MATCH",
            AmbiguousLevels { .. } => "STAT_AMBIGUOUS_LEVELS",
            CpMismatch { .. } => "STAT_CP_MISMATCH",
            InsufficientInput { .. } => "STAT_INSUFFICIENT_INPUT",
        }
    }
}

/// Errors raised while building a custom multiplier table.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableError {
    #[error("multiplier table is empty")]
    Empty,

    #[error("level {0} appears more than once")]
    DuplicateLevel(Level),

    #[error("levels must be listed in ascending order, {level} follows {previous}")]
    LevelsOutOfOrder { previous: Level, level: Level },

    #[error("multiplier for level {level} must be finite and positive, got {value}")]
    InvalidMultiplier { level: Level, value: f64 },

    #[error("multiplier for level {level} ({value}) does not exceed the previous level's")]
    NotIncreasing { level: Level, value: f64 },
}

impl SolverError for TableError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Range
    }

    fn error_code(&self) -> &'static str {
        use TableError::*;
        match self {
            Empty => "TABLE_EMPTY",
            DuplicateLevel(_) => "TABLE_DUPLICATE_LEVEL",
            LevelsOutOfOrder { .. } => "TABLE_LEVELS_OUT_OF_ORDER",
            InvalidMultiplier { .. } => "TABLE_INVALID_MULTIPLIER",
            NotIncreasing { .. } => "TABLE_NOT_INCREASING",
        }
    }
}

fn join<T: core::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
