use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_CPP_ENTRY, DEFAULT_C_ENTRY, DEFAULT_HEADER_EXTENSION,
    DEFAULT_OUTPUT_BASE_NAME, ENV_PREFIX, LOCAL_CONFIG_FILE,
};
use crate::utils::MergeError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Entry file names
    #[serde(default)]
    pub entry: EntrySettings,

    /// Output file settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Entry file names, C checked before C++
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySettings {
    pub c_entry: String,
    pub cpp_entry: String,
}

impl Default for EntrySettings {
    fn default() -> Self {
        Self {
            c_entry: DEFAULT_C_ENTRY.to_string(),
            cpp_entry: DEFAULT_CPP_ENTRY.to_string(),
        }
    }
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// File name of the merged output, without extension
    pub base_name: String,
    /// Extension of local headers, without the dot
    pub header_extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_OUTPUT_BASE_NAME.to_string(),
            header_extension: DEFAULT_HEADER_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Reject settings that cannot name a file in the working directory
    pub fn validate(&self) -> Result<(), MergeError> {
        let names = [
            ("entry.c_entry", &self.entry.c_entry),
            ("entry.cpp_entry", &self.entry.cpp_entry),
            ("output.base_name", &self.output.base_name),
            ("output.header_extension", &self.output.header_extension),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(MergeError::ConfigError(format!("{} must not be empty", key)));
            }
        }
        if self.output.header_extension.starts_with('.') {
            return Err(MergeError::ConfigError(
                "output.header_extension must not start with '.'".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    let global_config = get_config_dir().map(|dir| dir.join("config.toml"));
    let local_config = PathBuf::from(LOCAL_CONFIG_FILE);

    load_config_from(global_config.as_deref(), &local_config)
}

/// Layer defaults, the global file, the local file and the environment
pub fn load_config_from(global_config: Option<&Path>, local_config: &Path) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(global_config) = global_config.filter(|p| p.exists()) {
        figment = figment.merge(Toml::file(global_config));
    }

    if local_config.exists() {
        figment = figment.merge(Toml::file(local_config));
    }

    // UNITY_MERGER_OUTPUT__BASE_NAME=... style overrides
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment.extract().context("Failed to load configuration")
}

/// Load configuration from an explicit file, ignoring the other layers
pub fn load_config_file(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("Failed to parse config from {}", path.display()))
}

/// Get the platform configuration directory, if one can be determined
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", CONFIG_DIR_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}
