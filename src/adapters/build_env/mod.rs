//! Build-environment adapters.
//!
//! `DefineList` is the in-memory define collection handed to the loader.
//! `render` turns the defines of one run into the text a build tool reads.

pub mod define_list;
pub mod render;

pub use define_list::DefineList;
pub use render::{render, DefineFormat};
