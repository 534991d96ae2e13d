//! envhook - WiFi credential pre-build hook
//!
//! Reads `.env` from the build root, checks that `WIFI_SSID` and
//! `WIFI_PASSWORD` are present and appends them to a build environment as
//! preprocessor defines whose values are quoted string literals.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): `.env` grammar, defines, required keys
//! - **Service Layer** (`services`): the load-and-inject workflow
//! - **Adapters** (`adapters`): define collections and output rendering
//! - **Infrastructure Layer** (`infrastructure`): file access, settings, logging
//! - **CLI Layer** (`cli`): process exit handling for the binary
//!
//! # Example
//!
//! ```no_run
//! use envhook::{BuildEnvironment, DefineList, EnvironmentConfigLoader};
//!
//! let mut defines = DefineList::new();
//! EnvironmentConfigLoader::new(".").load_and_inject(&mut defines)?;
//! assert_eq!(defines.defines().len(), 2);
//! # Ok::<(), envhook::ConfigError>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::build_env::{DefineFormat, DefineList};
pub use domain::models::{ConfigEntry, ConfigMap, Define, MalformedLine, RequiredKey};
pub use domain::ports::BuildEnvironment;
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::{HookConfig, SettingsLoader};
pub use services::{EnvironmentConfigLoader, InjectionReport, ENV_FILE_NAME};
