//! Rendering of injected defines for the tool that invoked the hook.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::models::Define;

/// How defines are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefineFormat {
    /// Shell-quoted `-DNAME=VALUE` compiler flags, one per line
    #[default]
    Flags,
    /// Cargo build-script directives
    Cargo,
    /// JSON array of `{name, value}` objects
    Json,
}

/// Render `defines` in the requested format.
///
/// `env_path` is only used by the Cargo format, to re-run the build script
/// when the credentials file changes.
pub fn render(
    format: DefineFormat,
    defines: &[Define],
    env_path: &Path,
) -> Result<String, serde_json::Error> {
    let rendered = match format {
        DefineFormat::Flags => defines
            .iter()
            .map(compiler_flag)
            .collect::<Vec<_>>()
            .join("\n"),
        DefineFormat::Cargo => {
            let mut lines = vec![format!("cargo:rerun-if-changed={}", env_path.display())];
            lines.extend(defines.iter().map(|define| {
                format!(
                    "cargo:rustc-env={}={}",
                    define.name,
                    define.unescaped_value().unwrap_or_default()
                )
            }));
            lines.join("\n")
        }
        DefineFormat::Json => serde_json::to_string_pretty(defines)?,
    };
    Ok(rendered)
}

/// One `-D` flag as a single shell word.
///
/// Build tools split hook output shell-style, so the flag is wrapped in
/// single quotes and a string-literal value uses plain double quotes:
/// `'-DWIFI_SSID="Home Net"'` reaches the compiler as one argument.
fn compiler_flag(define: &Define) -> String {
    let flag = match (define.literal_contents(), &define.value) {
        (Some(contents), _) => format!("-D{}=\"{}\"", define.name, contents),
        (None, Some(value)) => format!("-D{}={}", define.name, value),
        (None, None) => format!("-D{}", define.name),
    };
    shell_quote(&flag)
}

/// Wrap in single quotes, closing and escaping any embedded `'`.
fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}
