use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::domain::{ConfigError, ConfigResult};

/// Read the whole credentials file.
///
/// The handle is dropped before returning on every path. A file that
/// disappears between the existence check and the open is still reported
/// as `FileNotFound`.
pub fn read_env_file(path: &Path) -> ConfigResult<String> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut contents = String::new();
    {
        let mut file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::IoFailure {
                path: path.to_path_buf(),
                source,
            },
        })?;

        file.read_to_string(&mut contents)
            .map_err(|source| ConfigError::IoFailure {
                path: path.to_path_buf(),
                source,
            })?;
    }

    debug!(path = %path.display(), bytes = contents.len(), "read credentials file");
    Ok(contents)
}
