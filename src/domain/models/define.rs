use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Escaped double quote as it must appear inside a define's textual value.
const ESCAPED_QUOTE: &str = "\\\"";

/// A preprocessor define: a name and an optional textual value.
///
/// The textual value is passed to the compiler verbatim, so a string
/// constant has to carry its own escaped quotes (`\"MyNet\"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Define {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DefineParseError {
    #[error("Define name cannot be empty: {0:?}")]
    EmptyName(String),
}

impl Define {
    /// A define with no value (`-DNAME`).
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// A define whose textual value is used as is.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A define whose value becomes a quoted string literal in compiled
    /// source. `raw` is wrapped in `\"` on both ends and is not otherwise
    /// escaped.
    pub fn quoted(name: impl Into<String>, raw: &str) -> Self {
        Self::with_value(name, format!("{ESCAPED_QUOTE}{raw}{ESCAPED_QUOTE}"))
    }

    /// Contents of a `\"…\"` string-literal value, `None` for any other value.
    pub fn literal_contents(&self) -> Option<&str> {
        self.value
            .as_deref()?
            .strip_prefix(ESCAPED_QUOTE)?
            .strip_suffix(ESCAPED_QUOTE)
    }

    /// The value with one layer of `\"` wrapping removed, if present.
    pub fn unescaped_value(&self) -> Option<&str> {
        self.literal_contents().or(self.value.as_deref())
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for Define {
    type Err = DefineParseError;

    /// Parse `NAME` or `NAME=VALUE`, splitting on the first `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s.trim(), None),
        };

        if name.is_empty() {
            return Err(DefineParseError::EmptyName(s.to_string()));
        }

        Ok(match value {
            Some(value) => Self::with_value(name, value),
            None => Self::bare(name),
        })
    }
}
