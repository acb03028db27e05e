//! Solver configuration loader.

use std::path::Path;

use solver_core::SolverConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for solver configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<SolverConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<SolverConfig> {
        let config: SolverConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse solver config TOML: {}", e))?;

        if !config.cp_tolerance.is_finite() || config.cp_tolerance < 0.0 {
            anyhow::bail!(
                "cp_tolerance must be a non-negative number, got {}",
                config.cp_tolerance
            );
        }

        Ok(config)
    }

    /// The configuration shipped with the crate.
    pub fn embedded() -> LoadResult<SolverConfig> {
        Self::parse(include_str!("../../data/solver.toml"))
    }
}
