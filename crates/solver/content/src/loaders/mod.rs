//! Content loaders for reading reference data from files.

pub mod config;
pub mod factory;
pub mod multipliers;
pub mod species;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use multipliers::{MultiplierLoader, MultiplierSpec};
pub use species::{Species, SpeciesCatalog, SpeciesLoader, SpeciesRegistry};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
