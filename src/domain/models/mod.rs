pub mod config_map;
pub mod define;
pub mod required_key;

pub use config_map::{ConfigEntry, ConfigMap, MalformedLine, ParsedLine};
pub use define::Define;
pub use required_key::RequiredKey;
