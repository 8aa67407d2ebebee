use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::AppConfig;
use crate::error::SuggestError;

const CONFIG_DIR: &str = "suggest-domain";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to show when the file was unusable
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: AppConfig,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user's config file, falling back to defaults on any problem
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };
    load_config_or_default(&path)
}

pub fn load_config_or_default(path: &Path) -> ConfigResult {
    match load_config_from_path(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            ConfigResult {
                config: AppConfig::default(),
                warning: Some(format!("{} ({})", e, path.display())),
            }
        }
    }
}

/// Read and parse a config file; a missing file is not an error
pub fn load_config_from_path(path: &Path) -> Result<AppConfig, SuggestError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config_toml(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(SuggestError::Io(e)),
    }
}

pub fn parse_config_toml(content: &str) -> Result<AppConfig, SuggestError> {
    toml::from_str::<AppConfig>(content).map_err(|e| SuggestError::ConfigParse(e.message().to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
