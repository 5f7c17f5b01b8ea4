//! Centralized path helpers for the config directory.

use std::path::PathBuf;

use crate::core::app;

/// Environment variable overriding the config file location (used by tests and scripts).
pub const CONFIG_FILE_ENV: &str = "DOCCHAT_CONFIG";

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/docchat-render/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Path of the optional JSON config file.
/// `DOCCHAT_CONFIG` takes precedence over the platform config directory.
pub fn config_file() -> Option<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_FILE_ENV)
        && !p.trim().is_empty()
    {
        return Some(PathBuf::from(p));
    }
    config_dir().map(|d| d.join("config.json"))
}
