//! Reading the `.env` credentials file from disk.

pub mod reader;

pub use reader::read_env_file;
