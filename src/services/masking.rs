//! Masking of credential values before they reach a log line.
//!
//! Disclosure is decided per required key: `WIFI_SSID` is shown so the
//! operator can confirm which network the firmware targets, `WIFI_PASSWORD`
//! never is. Unrelated defines are shown as they are.

use crate::domain::models::{Define, RequiredKey};

/// Fixed placeholder shown for a secret value in the injection summary.
pub const SECRET_PLACEHOLDER: &str = "********";

/// One asterisk per character of `value`.
pub fn asterisks(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// Value as shown in the injection summary.
pub fn display_value(key: RequiredKey, value: &str) -> String {
    if key.is_secret() {
        SECRET_PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// Define as shown in the post-injection dump.
pub fn display_define(define: &Define) -> String {
    match (RequiredKey::from_name(&define.name), &define.value) {
        (Some(key), Some(_)) if key.is_secret() => {
            format!("{}={}", define.name, SECRET_PLACEHOLDER)
        }
        _ => define.to_string(),
    }
}
