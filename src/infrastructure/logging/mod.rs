//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Human-readable or JSON formatting
//! - `RUST_LOG` overrides on top of the configured level
//! - Output on stderr, leaving stdout to the rendered defines

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
