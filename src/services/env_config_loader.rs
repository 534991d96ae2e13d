//! The `.env` → preprocessor define workflow.
//!
//! One call to [`EnvironmentConfigLoader::load_and_inject`] runs the whole
//! sequence: existence check, parse, required-key validation, injection and
//! the post-injection dump. Any error leaves the build environment
//! untouched.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::models::{ConfigMap, Define, MalformedLine, RequiredKey};
use crate::domain::ports::BuildEnvironment;
use crate::domain::{ConfigError, ConfigResult};
use crate::infrastructure::dotenv::read_env_file;
use crate::services::masking;

/// Credentials file name, relative to the build root.
pub const ENV_FILE_NAME: &str = ".env";

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionReport {
    /// Defines appended by this run, in required-key order
    pub added: Vec<Define>,
    /// Lines that were skipped with a warning
    pub malformed: Vec<MalformedLine>,
}

/// Loads WiFi credentials from `<root>/.env` into a build environment.
#[derive(Debug, Clone)]
pub struct EnvironmentConfigLoader {
    root: PathBuf,
}

impl EnvironmentConfigLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of the credentials file.
    pub fn env_path(&self) -> PathBuf {
        self.root.join(ENV_FILE_NAME)
    }

    /// Validate `.env` and append the WiFi defines to `build_env`.
    pub fn load_and_inject<B>(&self, build_env: &mut B) -> ConfigResult<InjectionReport>
    where
        B: BuildEnvironment + ?Sized,
    {
        let path = self.env_path();
        info!("Checking environment variables in {}", path.display());

        let (config, malformed) = Self::read_config(&path)?;
        let resolved = Self::validate(&config)?;

        let added = Self::inject(&resolved, &mut *build_env);
        Self::dump_defines(&*build_env);

        Ok(InjectionReport { added, malformed })
    }

    fn read_config(path: &Path) -> ConfigResult<(ConfigMap, Vec<MalformedLine>)> {
        let contents = read_env_file(path)?;
        let (config, malformed) = ConfigMap::parse(&contents);

        for line in &malformed {
            warn!(
                line_number = line.line_number,
                "⚠️  Warning: Invalid format on line {}: {}",
                line.line_number,
                line.content
            );
        }
        debug!(entries = config.len(), "parsed credentials file");

        Ok((config, malformed))
    }

    /// Resolve every required key, reporting all missing ones at once.
    fn validate(config: &ConfigMap) -> ConfigResult<Vec<(RequiredKey, String)>> {
        let mut resolved = Vec::with_capacity(RequiredKey::ALL.len());
        let mut missing = Vec::new();

        for key in RequiredKey::ALL {
            match config.get(key.as_str()) {
                Some(value) => {
                    info!("✓ {} = {}", key, masking::asterisks(value));
                    resolved.push((key, value.to_string()));
                }
                None => missing.push(key.as_str().to_string()),
            }
        }

        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(ConfigError::MissingRequiredKeys { keys: missing })
        }
    }

    fn inject<B>(resolved: &[(RequiredKey, String)], build_env: &mut B) -> Vec<Define>
    where
        B: BuildEnvironment + ?Sized,
    {
        info!("📡 Adding WiFi defines:");
        let defines: Vec<Define> = resolved
            .iter()
            .map(|(key, value)| {
                info!("   {} = \"{}\"", key, masking::display_value(*key, value));
                Define::quoted(key.as_str(), value)
            })
            .collect();

        build_env.append_defines(defines.clone());
        info!("✓ All required environment variables are set and added to build");
        defines
    }

    fn dump_defines<B>(build_env: &B)
    where
        B: BuildEnvironment + ?Sized,
    {
        info!("🔍 Current CPPDEFINES:");
        for define in build_env.defines() {
            info!("   {}", masking::display_define(define));
        }
    }
}
