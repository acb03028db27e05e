//! CLI runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::dirs;

/// Configuration read from the process environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub log_to_file: bool,
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SOLVER_DATA_DIR` - Directory with `species.ron`, `multipliers.toml`, `solver.toml`
    ///   (default: platform-specific data directory)
    /// - `SOLVER_LOG_FILE` - Also write logs to the platform cache directory (default: false)
    /// - `SOLVER_SESSION_ID` - Log session identifier (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("SOLVER_DATA_DIR").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("SOLVER_LOG_FILE") {
            config.log_to_file = enable;
        } else if env::var("SOLVER_LOG_FILE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.log_to_file = true;
        }

        config.session_id = env::var("SOLVER_SESSION_ID").ok();

        config
    }

    /// Data directory for content files, falling back to the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(dirs::data_dir)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let config = CliConfig {
            data_dir: Some(PathBuf::from("/srv/solver")),
            ..CliConfig::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/srv/solver"));
    }

    #[test]
    fn default_data_dir_is_platform_dir() {
        assert_eq!(CliConfig::default().data_dir(), dirs::data_dir());
    }

    #[test]
    fn read_env_ignores_unparsable_values() {
        assert_eq!(read_env::<bool>("SOLVER_TEST_UNSET_VARIABLE"), None);
    }
}
