//! Port trait definitions (Hexagonal Architecture)
//!
//! - BuildEnvironment: the define collection owned by the surrounding build
//!
//! The loader depends only on these traits, never on a concrete build tool.

pub mod build_environment;

pub use build_environment::BuildEnvironment;
