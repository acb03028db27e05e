//! Content factory for building solvers from data files.

use std::path::{Path, PathBuf};

use solver_core::{CustomMultipliers, SolverConfig, StatSolver};

use crate::loaders::{ConfigLoader, LoadResult, MultiplierLoader, SpeciesLoader, SpeciesRegistry};

/// Content factory that loads reference data from a data directory.
///
/// Files that are absent fall back to the copies embedded in the crate;
/// files that exist but fail to parse are reported as errors.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── solver.toml
/// ├── multipliers.toml
/// └── species.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load solver configuration from `solver.toml`.
    pub fn load_config(&self) -> LoadResult<SolverConfig> {
        let path = self.data_dir.join("solver.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "solver config not found, using embedded");
            return ConfigLoader::embedded();
        }
        ConfigLoader::load(&path)
    }

    /// Load the CP multiplier table from `multipliers.toml`.
    pub fn load_multipliers(&self) -> LoadResult<CustomMultipliers> {
        let path = self.data_dir.join("multipliers.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "multiplier table not found, using embedded");
            return MultiplierLoader::embedded();
        }
        MultiplierLoader::load(&path)
    }

    /// Load the species catalog from `species.ron`.
    pub fn load_species(&self) -> LoadResult<SpeciesRegistry> {
        let path = self.data_dir.join("species.ron");
        let species = if path.exists() {
            SpeciesLoader::load(&path)?
        } else {
            tracing::debug!(path = %path.display(), "species catalog not found, using embedded");
            SpeciesLoader::embedded()?
        };

        let registry = SpeciesRegistry::new(species)?;
        tracing::info!(count = registry.len(), "loaded species catalog");
        Ok(registry)
    }

    /// Builds a solver from `multipliers.toml` and `solver.toml`.
    pub fn build_solver(&self) -> LoadResult<StatSolver<CustomMultipliers>> {
        let table = self.load_multipliers()?;
        let config = self.load_config()?;
        tracing::info!(
            levels = table.len(),
            cp_tolerance = config.cp_tolerance,
            "built stat solver"
        );
        Ok(StatSolver::new(table, config))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
