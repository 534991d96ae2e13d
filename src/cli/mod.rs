//! Command-line edge of the hook.
//!
//! The binary has no behavior flags; settings come from `envhook.yaml` and
//! `ENVHOOK_*` variables. This module turns terminal errors into process
//! exits so the library never has to.

pub mod hook;
pub mod types;

pub use hook::{execute, handle_error};
pub use types::Cli;
