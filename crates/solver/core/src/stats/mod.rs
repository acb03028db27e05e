//! Stat value types.
//!
//! ```text
//! [ BaseStats (per species/form) ] + [ IvTriple (per instance) ]
//!      ↓
//! [ CP formula with level multiplier ]
//! ```
//!
//! Base stats are fixed reference data supplied by the caller. IVs come in two
//! shapes: [`IvInput`] as typed by a user (any component may be unknown or out
//! of range) and [`IvTriple`] once every component is known and in range.

mod base;
mod ivs;

pub use base::BaseStats;
pub use ivs::{IvInput, IvParseError, IvTriple, StatKind};
