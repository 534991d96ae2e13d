//! Hook settings management
//!
//! Hierarchical configuration using figment:
//! - Programmatic defaults
//! - Optional `envhook.yaml` next to the build
//! - `ENVHOOK_*` environment variable overrides
//! - Validation after extraction

pub mod loader;

pub use loader::{HookConfig, SettingsError, SettingsLoader, ENV_PREFIX, SETTINGS_FILE};
