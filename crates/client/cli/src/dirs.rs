//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

const APP_NAME: &str = "stat-solver";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/stat-solver/logs`
/// - Linux: `~/.cache/stat-solver/logs` (or `$XDG_CACHE_HOME/stat-solver/logs`)
/// - Windows: `%LOCALAPPDATA%\stat-solver\logs`
/// - Fallback: `/tmp/stat-solver/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME));

    base_dir.join("logs")
}

/// Get the platform-specific data directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/stat-solver`
/// - Linux: `~/.local/share/stat-solver` (or `$XDG_DATA_HOME/stat-solver`)
/// - Windows: `%APPDATA%\stat-solver`
/// - Fallback: `./data`
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}
