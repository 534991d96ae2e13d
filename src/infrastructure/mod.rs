//! Infrastructure layer module
//!
//! - Reading the `.env` credentials file
//! - Hook settings (figment: YAML file + `ENVHOOK_*` environment)
//! - Logging infrastructure (tracing-subscriber on stderr)

pub mod config;
pub mod dotenv;
pub mod logging;
