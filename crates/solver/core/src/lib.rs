//! Deterministic stat rules for captured creatures.
//!
//! `solver-core` reconciles a creature's Level, Combat Power (CP) and
//! Individual Values (IVs) against its species base stats. All inference flows
//! through [`solver::StatSolver`]; the free function [`validate`] binds it to
//! the built-in multiplier table.
//!
//! The crate performs no I/O and holds no mutable state. Every function is
//! pure, so verdicts can be recomputed freely by any front end.
pub mod config;
pub mod error;
pub mod form;
pub mod formula;
pub mod level;
pub mod solver;
pub mod stats;
pub mod table;

pub use config::SolverConfig;
pub use error::{ErrorKind, InputField, SolverError, StatError, TableError};
pub use form::{FormInput, InstanceStats};
pub use formula::{compute_cp, cp_at_level, cp_range};
pub use level::{Level, LevelError};
pub use solver::{
    Computed, Field, FieldErrors, StatSolver, ValidationRequest, ValidationResult, validate,
};
pub use stats::{BaseStats, IvInput, IvParseError, IvTriple, StatKind};
pub use table::{
    CustomMultipliers, Multiplier, MultiplierTable, StandardMultipliers, multiplier_for,
};
