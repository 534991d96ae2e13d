use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::build_env::DefineFormat;
use crate::domain::models::Define;
use crate::infrastructure::logging::logger::parse_log_level;
use crate::infrastructure::logging::LogConfig;

/// Optional settings file, looked up in the working directory.
pub const SETTINGS_FILE: &str = "envhook.yaml";

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "ENVHOOK_";

/// Settings of the hook process itself.
///
/// The credentials file name and the required keys are fixed and cannot be
/// set here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    /// Build root containing `.env`
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// How injected defines are written to stdout
    #[serde(default)]
    pub output: DefineFormat,

    #[serde(default)]
    pub logging: LogConfig,

    /// Defines the host build already carries, as `NAME` or `NAME=VALUE`
    #[serde(default)]
    pub defines: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: DefineFormat::default(),
            logging: LogConfig::default(),
            defines: Vec::new(),
        }
    }
}

/// Settings validation errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Build root cannot be empty")]
    EmptyRoot,

    #[error("Invalid pre-existing define {0:?}: name cannot be empty")]
    InvalidDefine(String),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings for a hook invoked from the current directory.
    pub fn load() -> Result<HookConfig> {
        Self::load_from(Path::new("."))
    }

    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `<dir>/envhook.yaml` (optional)
    /// 3. Environment variables (`ENVHOOK_*` prefix, `__` for nesting)
    pub fn load_from(dir: &Path) -> Result<HookConfig> {
        let config: HookConfig = Figment::new()
            .merge(Serialized::defaults(HookConfig::default()))
            .merge(Yaml::file(dir.join(SETTINGS_FILE)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract hook settings from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate settings after loading
    pub fn validate(config: &HookConfig) -> Result<(), SettingsError> {
        if config.root.as_os_str().is_empty() {
            return Err(SettingsError::EmptyRoot);
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(SettingsError::InvalidLogLevel(config.logging.level.clone()));
        }

        if let Some(spec) = config
            .defines
            .iter()
            .find(|spec| spec.parse::<Define>().is_err())
        {
            return Err(SettingsError::InvalidDefine(spec.clone()));
        }

        Ok(())
    }
}
