use std::path::PathBuf;

use thiserror::Error;

/// Terminal errors raised while loading `.env` credentials.
///
/// Every variant halts the build. The library only returns them; turning
/// them into a process exit is the job of the binary.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{} file not found!", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required environment variables: {}", .keys.join(", "))]
    MissingRequiredKeys { keys: Vec<String> },
}

impl ConfigError {
    /// Operator-facing follow-up line printed under the error.
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => {
                "Please create a .env file based on wifi_config.template"
            }
            Self::IoFailure { .. } => "Please check that the .env file is readable UTF-8 text",
            Self::MissingRequiredKeys { .. } => {
                "Please check your .env file and ensure all required variables are set"
            }
        }
    }

    /// Process exit status used by the binary. All variants are terminal.
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
