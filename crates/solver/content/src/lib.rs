//! Data-driven reference content and loaders.
//!
//! This crate houses the static data the solver is run against and provides
//! loaders for RON/TOML data files:
//! - Species base stats (data-driven via RON)
//! - CP multiplier table overrides (data-driven via TOML)
//! - Solver configuration (data-driven via TOML)
//!
//! Embedded copies of every file ship with the crate, so a missing data
//! directory still yields a working solver.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ContentFactory, MultiplierLoader, MultiplierSpec, Species, SpeciesCatalog,
    SpeciesLoader, SpeciesRegistry,
};
