//! CP multiplier table loader.
//!
//! A table file either lists every level explicitly or caps the built-in
//! table at a maximum level. An empty file yields the full built-in table.

use std::path::Path;

use serde::{Deserialize, Serialize};
use solver_core::{CustomMultipliers, Level, Multiplier, StandardMultipliers};

use crate::loaders::{LoadResult, read_file};

/// One `[[levels]]` row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierRow {
    pub level: f64,
    pub multiplier: f64,
}

/// Table file structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplierSpec {
    /// Highest level kept from the built-in table when `levels` is empty.
    pub max_level: Option<f64>,
    pub levels: Vec<MultiplierRow>,
}

impl MultiplierSpec {
    /// Resolves the file contents into a validated table.
    pub fn build(&self) -> LoadResult<CustomMultipliers> {
        if !self.levels.is_empty() {
            if self.max_level.is_some() {
                tracing::warn!("max_level is ignored when levels are listed explicitly");
            }
            let entries = self
                .levels
                .iter()
                .map(|row| {
                    let level = Level::try_from(row.level)
                        .map_err(|e| anyhow::anyhow!("Invalid multiplier row: {}", e))?;
                    Ok(Multiplier::new(level, row.multiplier))
                })
                .collect::<LoadResult<Vec<_>>>()?;
            return CustomMultipliers::new(entries)
                .map_err(|e| anyhow::anyhow!("Invalid multiplier table: {}", e));
        }

        let max = match self.max_level {
            Some(value) => Level::try_from(value)
                .map_err(|e| anyhow::anyhow!("Invalid max_level: {}", e))?,
            None => Level::MAX,
        };
        CustomMultipliers::capped(&StandardMultipliers, max)
            .map_err(|e| anyhow::anyhow!("Invalid multiplier table: {}", e))
    }
}

/// Loader for multiplier tables from TOML files.
pub struct MultiplierLoader;

impl MultiplierLoader {
    /// Load a multiplier table from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CustomMultipliers> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a multiplier table from TOML text.
    pub fn parse(content: &str) -> LoadResult<CustomMultipliers> {
        let spec: MultiplierSpec = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse multiplier TOML: {}", e))?;
        spec.build()
    }

    /// The table shipped with the crate.
    pub fn embedded() -> LoadResult<CustomMultipliers> {
        Self::parse(include_str!("../../data/multipliers.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_core::MultiplierTable;

    fn level(value: f64) -> Level {
        Level::from_f64(value).unwrap()
    }

    #[test]
    fn embedded_is_full_standard_table() {
        let table = MultiplierLoader::embedded().unwrap();
        assert_eq!(table.entries(), StandardMultipliers.entries());
    }

    #[test]
    fn max_level_caps_standard_table() {
        let table = MultiplierLoader::parse("max_level = 50.0").unwrap();
        assert_eq!(table.max_level(), level(50.0));
        assert_eq!(table.multiplier(level(50.5)), None);
    }

    #[test]
    fn explicit_rows_replace_table() {
        let content = r#"
            [[levels]]
            level = 1.0
            multiplier = 0.1

            [[levels]]
            level = 1.5
            multiplier = 0.2
        "#;
        let table = MultiplierLoader::parse(content).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.multiplier(level(1.5)), Some(0.2));
    }

    #[test]
    fn bad_rows_are_rejected() {
        let off_ladder = r#"
            [[levels]]
            level = 1.25
            multiplier = 0.1
        "#;
        let err = MultiplierLoader::parse(off_ladder).unwrap_err();
        assert!(err.to_string().contains("Invalid multiplier row"));

        let decreasing = r#"
            [[levels]]
            level = 1.0
            multiplier = 0.2

            [[levels]]
            level = 2.0
            multiplier = 0.1
        "#;
        let err = MultiplierLoader::parse(decreasing).unwrap_err();
        assert!(err.to_string().contains("Invalid multiplier table"));

        assert!(MultiplierLoader::parse("max_level = 99.0").is_err());
    }
}
