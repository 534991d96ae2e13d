use std::fmt;

/// Keys that must be present in `.env` before the build may proceed.
///
/// The set is closed. Whether a key's value may be shown in logs is decided
/// per key, not by looking at its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredKey {
    WifiSsid,
    WifiPassword,
}

impl RequiredKey {
    /// Every required key, in validation and injection order.
    pub const ALL: [Self; 2] = [Self::WifiSsid, Self::WifiPassword];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WifiSsid => "WIFI_SSID",
            Self::WifiPassword => "WIFI_PASSWORD",
        }
    }

    /// Secret values are never written to logs in clear text.
    pub const fn is_secret(&self) -> bool {
        matches!(self, Self::WifiPassword)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for RequiredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
