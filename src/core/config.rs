//! Renderer configuration: document directory, backend endpoints, and compared models.
//!
//! Values are layered: built-in defaults, then the optional `config.json`, then
//! `DOCCHAT_*` environment variables. CLI flags are applied on top by the caller.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::paths;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const DEFAULT_DATA_DIRECTORY: &str = "../data/TCA/";
const DEFAULT_COMPARE_MODELS: &[&str] = &["llama3.1", "gpt-3.5-turbo"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix under which reference filenames resolve to openable documents.
    pub data_directory: String,
    pub query_endpoint: String,
    pub compare_endpoint: String,
    pub processdocs_endpoint: String,
    /// Model keys rendered by a comparison, in display order.
    pub compare_models: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }
}

impl Config {
    /// Defaults with all three endpoints rooted at `base`.
    pub fn with_api_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            data_directory: DEFAULT_DATA_DIRECTORY.to_string(),
            query_endpoint: format!("{}/query", base),
            compare_endpoint: format!("{}/compare", base),
            processdocs_endpoint: format!("{}/processdocs", base),
            compare_models: DEFAULT_COMPARE_MODELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("No models configured for comparison")]
    NoCompareModels,
}

/// On-disk shape of `config.json`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_base: Option<String>,
    data_directory: Option<String>,
    query_endpoint: Option<String>,
    compare_endpoint: Option<String>,
    processdocs_endpoint: Option<String>,
    compare_models: Option<Vec<String>>,
}

/// Load configuration from the config file (if present) and environment.
pub fn load() -> Result<Config, ConfigError> {
    let file = paths::config_file();
    load_from(file.as_deref(), |key| env::var(key).ok())
}

/// Layer the file at `path` and the variables returned by `var` over the defaults.
pub(crate) fn load_from<F>(path: Option<&Path>, var: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let file = match path {
        Some(p) if p.exists() => read_config_file(p)?,
        Some(p) => {
            log::debug!("No config file at {}", p.display());
            ConfigFile::default()
        }
        None => ConfigFile::default(),
    };
    let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    let api_base = var("DOCCHAT_API_BASE").or(file.api_base);
    let mut config = match api_base {
        Some(base) => Config::with_api_base(&base),
        None => Config::default(),
    };

    if let Some(dir) = var("DOCCHAT_DATA_DIRECTORY").or(file.data_directory) {
        config.data_directory = dir;
    }
    if let Some(url) = file.query_endpoint {
        config.query_endpoint = url;
    }
    if let Some(url) = file.compare_endpoint {
        config.compare_endpoint = url;
    }
    if let Some(url) = file.processdocs_endpoint {
        config.processdocs_endpoint = url;
    }

    let models = match var("DOCCHAT_COMPARE_MODELS") {
        Some(list) => Some(parse_model_list(&list)),
        None => file.compare_models,
    };
    if let Some(models) = models {
        if models.is_empty() {
            return Err(ConfigError::NoCompareModels);
        }
        config.compare_models = models;
    }

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Loaded config file {}", path.display());
    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Split a comma-separated model list, dropping blanks.
pub fn parse_model_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
