//! Domain layer for envhook
//!
//! Core types for loading `.env` credentials and describing preprocessor
//! defines, independent of any particular build system.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{ConfigError, ConfigResult};
