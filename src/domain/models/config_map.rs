//! `.env` line grammar and the transient key/value map built from it.
//!
//! Supported syntax is deliberately small: `KEY=VALUE` declarations, `#`
//! comments and blank lines. A value wrapped in one matching pair of `"` or
//! `'` loses exactly that pair. Anything else is reported as malformed and
//! skipped.

use std::collections::HashMap;

use serde::Serialize;

/// A single `key=value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

/// A line that is neither blank, a comment, nor a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    /// 1-based line number within the file
    pub line_number: usize,
    /// The line content after trimming
    pub content: String,
}

/// Classification of one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Blank,
    Comment,
    Entry(ConfigEntry),
    Malformed,
}

impl ParsedLine {
    /// Classify a raw line.
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim();

        if line.is_empty() {
            return Self::Blank;
        }
        if line.starts_with('#') {
            return Self::Comment;
        }

        match line.split_once('=') {
            Some((key, value)) => Self::Entry(ConfigEntry {
                key: key.trim().to_string(),
                value: strip_matching_quotes(value.trim()).to_string(),
            }),
            None => Self::Malformed,
        }
    }
}

/// Remove one layer of matching `"` or `'` wrapping the whole value.
fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Split on `\n`, `\r\n` and bare `\r`, each counting as one line break.
///
/// A trailing break does not start an extra empty line.
fn split_lines(contents: &str) -> Vec<&str> {
    let bytes = contents.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&contents[start..index]);
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(&contents[start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                start = index;
            }
            _ => index += 1,
        }
    }
    if start < contents.len() {
        lines.push(&contents[start..]);
    }

    lines
}

/// Key/value pairs parsed from a `.env` file. Last occurrence of a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: HashMap<String, String>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse file contents line by line.
    ///
    /// Returns the map together with every malformed line, in file order.
    /// Malformed lines never abort the parse.
    pub fn parse(contents: &str) -> (Self, Vec<MalformedLine>) {
        let mut map = Self::new();
        let mut malformed = Vec::new();

        for (index, raw) in split_lines(contents).into_iter().enumerate() {
            match ParsedLine::parse(raw) {
                ParsedLine::Blank | ParsedLine::Comment => {}
                ParsedLine::Entry(entry) => map.insert(entry),
                ParsedLine::Malformed => malformed.push(MalformedLine {
                    line_number: index + 1,
                    content: raw.trim().to_string(),
                }),
            }
        }

        (map, malformed)
    }

    pub fn insert(&mut self, entry: ConfigEntry) {
        self.entries.insert(entry.key, entry.value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> ParsedLine {
        ParsedLine::Entry(ConfigEntry {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    #[test]
    fn test_parse_line_kinds() {
        assert_eq!(ParsedLine::parse(""), ParsedLine::Blank);
        assert_eq!(ParsedLine::parse("   \t"), ParsedLine::Blank);
        assert_eq!(ParsedLine::parse("# comment"), ParsedLine::Comment);
        assert_eq!(ParsedLine::parse("   # indented=comment"), ParsedLine::Comment);
        assert_eq!(ParsedLine::parse("JUSTAWORD"), ParsedLine::Malformed);
        assert_eq!(ParsedLine::parse("KEY=value"), entry("KEY", "value"));
    }

    #[test]
    fn test_split_on_first_equals_only() {
        assert_eq!(ParsedLine::parse("URL=a=b=c"), entry("URL", "a=b=c"));
        assert_eq!(ParsedLine::parse("EMPTY="), entry("EMPTY", ""));
        assert_eq!(ParsedLine::parse("=orphan"), entry("", "orphan"));
    }

    #[test]
    fn test_whitespace_trimmed_around_key_and_value() {
        assert_eq!(
            ParsedLine::parse("  WIFI_SSID  =   Home Net  "),
            entry("WIFI_SSID", "Home Net")
        );
    }

    #[test]
    fn test_single_layer_of_quotes_stripped() {
        assert_eq!(ParsedLine::parse(r#"A="MyNet""#), entry("A", "MyNet"));
        assert_eq!(ParsedLine::parse("A='MyNet'"), entry("A", "MyNet"));
        assert_eq!(ParsedLine::parse(r#"A=""MyNet"""#), entry("A", r#""MyNet""#));
        assert_eq!(ParsedLine::parse(r#"A="""#), entry("A", ""));
    }

    #[test]
    fn test_mismatched_or_lone_quotes_kept() {
        assert_eq!(ParsedLine::parse(r#"A="MyNet'"#), entry("A", r#""MyNet'"#));
        assert_eq!(ParsedLine::parse(r#"A="open"#), entry("A", r#""open"#));
        assert_eq!(ParsedLine::parse(r#"A=""#), entry("A", "\""));
    }

    #[test]
    fn test_parse_collects_malformed_with_line_numbers() {
        let contents = "# header\n\nWIFI_SSID=Home\noops\nWIFI_PASSWORD=pw\n  also bad  \n";
        let (map, malformed) = ConfigMap::parse(contents);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("WIFI_SSID"), Some("Home"));
        assert_eq!(map.get("WIFI_PASSWORD"), Some("pw"));
        assert_eq!(
            malformed,
            vec![
                MalformedLine {
                    line_number: 4,
                    content: "oops".to_string()
                },
                MalformedLine {
                    line_number: 6,
                    content: "also bad".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_last_occurrence_wins() {
        let (map, malformed) = ConfigMap::parse("KEY=first\nKEY=second\n");
        assert!(malformed.is_empty());
        assert_eq!(map.get("KEY"), Some("second"));
    }

    #[test]
    fn test_windows_line_endings() {
        let (map, malformed) = ConfigMap::parse("WIFI_SSID=Home\r\nWIFI_PASSWORD='pw'\r\n");
        assert!(malformed.is_empty());
        assert_eq!(map.get("WIFI_SSID"), Some("Home"));
        assert_eq!(map.get("WIFI_PASSWORD"), Some("pw"));
    }

    #[test]
    fn test_bare_carriage_return_line_endings() {
        let (map, malformed) = ConfigMap::parse("WIFI_SSID=Home\rbroken\rWIFI_PASSWORD=pw\r");

        assert_eq!(map.get("WIFI_SSID"), Some("Home"));
        assert_eq!(map.get("WIFI_PASSWORD"), Some("pw"));
        assert_eq!(
            malformed,
            vec![MalformedLine {
                line_number: 2,
                content: "broken".to_string(),
            }]
        );
    }

    #[test]
    fn test_mixed_line_endings_keep_line_numbers() {
        let (map, malformed) = ConfigMap::parse("A=1\r\nB=2\rbad\nC=3\r\n\r\nworse");

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("C"), Some("3"));
        let numbers: Vec<_> = malformed.iter().map(|line| line.line_number).collect();
        assert_eq!(numbers, vec![3, 6]);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\r"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_empty_contents() {
        let (map, malformed) = ConfigMap::parse("");
        assert!(map.is_empty());
        assert!(malformed.is_empty());
        assert!(!map.contains_key("WIFI_SSID"));
    }
}
