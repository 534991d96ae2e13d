//! Service layer: the `.env` loading workflow and its log masking rules.

pub mod env_config_loader;
pub mod masking;

pub use env_config_loader::{EnvironmentConfigLoader, InjectionReport, ENV_FILE_NAME};
