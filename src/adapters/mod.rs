//! Adapters for the build systems that consume injected defines.

pub mod build_env;
