use envhook::domain::models::ParsedLine;
use envhook::ConfigMap;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z_][A-Z0-9_]{0,15}"
}

/// Values without quotes, `=` or surrounding whitespace.
fn plain_value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9@!._-]([A-Za-z0-9 @!._-]{0,20}[A-Za-z0-9@!._-])?"
}

proptest! {
    /// Property: a well-formed declaration reads back its trimmed value
    #[test]
    fn prop_declaration_round_trips(
        key in key_strategy(),
        value in plain_value_strategy(),
        pad_left in " {0,3}",
        pad_right in " {0,3}",
    ) {
        let line = format!("{pad_left}{key}{pad_right}={pad_left}{value}{pad_right}");
        let (map, malformed) = ConfigMap::parse(&line);

        prop_assert!(malformed.is_empty());
        prop_assert_eq!(map.get(&key), Some(value.as_str()));
    }

    /// Property: exactly one layer of matching quotes is removed
    #[test]
    fn prop_one_quote_layer_stripped(
        key in key_strategy(),
        value in plain_value_strategy(),
        quote in prop::sample::select(vec!['"', '\'']),
        layers in 1usize..4,
    ) {
        let wrapped = format!(
            "{q}{value}{q}",
            q = quote.to_string().repeat(layers),
        );
        let (map, _) = ConfigMap::parse(&format!("{key}={wrapped}"));

        let expected = format!(
            "{q}{value}{q}",
            q = quote.to_string().repeat(layers - 1),
        );
        prop_assert_eq!(map.get(&key), Some(expected.as_str()));
    }

    /// Property: comment lines never produce entries or warnings
    #[test]
    fn prop_comments_ignored(body in "[^\r\n]{0,40}", indent in "[ \t]{0,4}") {
        let line = format!("{indent}#{body}");
        prop_assert_eq!(ParsedLine::parse(&line), ParsedLine::Comment);

        let (map, malformed) = ConfigMap::parse(&line);
        prop_assert!(map.is_empty());
        prop_assert!(malformed.is_empty());
    }

    /// Property: lines without `=` are warned about at their 1-based position
    #[test]
    fn prop_malformed_line_numbers(
        leading in 0usize..10,
        garbage in "[A-Za-z][A-Za-z0-9 ]{0,20}",
    ) {
        let mut contents = "VALID=1\n".repeat(leading);
        contents.push_str(&garbage);
        contents.push('\n');

        let (map, malformed) = ConfigMap::parse(&contents);

        prop_assert_eq!(malformed.len(), 1);
        prop_assert_eq!(malformed[0].line_number, leading + 1);
        prop_assert_eq!(malformed[0].content.as_str(), garbage.trim());
        prop_assert_eq!(map.len(), usize::from(leading > 0));
    }
}
