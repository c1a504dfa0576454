//! URL Fragment Codec
//!
//! Writes and reads the filter state as `#show_red_only=1&category=<tok>&search=<enc>`.
//! Axis order is fixed and inert axes are omitted entirely.

use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::state::FilterState;

pub const SHOW_RED_ONLY_KEY: &str = "show_red_only";
pub const CATEGORY_KEY: &str = "category";
pub const SEARCH_KEY: &str = "search";

// Same unreserved set as JavaScript's encodeURIComponent
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Serialize a state to its fragment, including the leading `#`.
///
/// Category tokens are written raw; search text is percent-encoded.
pub fn encode(state: &FilterState) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if state.show_red_only {
        parts.push(format!("{}=1", SHOW_RED_ONLY_KEY));
    }
    if !state.category.is_empty() {
        parts.push(format!("{}={}", CATEGORY_KEY, state.category));
    }
    if !state.search.is_empty() {
        let encoded = utf8_percent_encode(&state.search, COMPONENT_ENCODE_SET);
        parts.push(format!("{}={}", SEARCH_KEY, encoded));
    }
    format!("#{}", parts.join("&"))
}

/// Raw key/value pairs parsed from a fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentParams {
    values: HashMap<String, String>,
}

impl FragmentParams {
    /// Parse `#k=v&k2=v2`. Tokens without `=` map to an empty value,
    /// empty tokens are skipped and a repeated key keeps its last value.
    pub fn parse(fragment: &str) -> Self {
        let body = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut values = HashMap::new();
        for token in body.split('&').filter(|t| !t.is_empty()) {
            let (key, value) = token.split_once('=').unwrap_or((token, ""));
            values.insert(key.to_string(), value.to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Map known keys onto a state; unknown keys are ignored
    pub fn to_state(&self) -> FilterState {
        let search = self
            .get(SEARCH_KEY)
            .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
            .unwrap_or_default();
        FilterState {
            show_red_only: self.get(SHOW_RED_ONLY_KEY) == Some("1"),
            category: self.get(CATEGORY_KEY).unwrap_or_default().to_string(),
            search,
        }
    }
}

impl FilterState {
    /// Parse a fragment straight into a state
    pub fn from_fragment(fragment: &str) -> Self {
        FragmentParams::parse(fragment).to_state()
    }

    pub fn to_fragment(&self) -> String {
        encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_inert_state_is_bare_hash() {
        assert_eq!(encode(&FilterState::default()), "#");
    }

    #[test]
    fn test_encode_axis_order() {
        let state = FilterState::new(true, "news", "bank");
        assert_eq!(encode(&state), "#show_red_only=1&category=news&search=bank");

        let state = FilterState::new(false, "", "bank");
        assert_eq!(encode(&state), "#search=bank");

        let state = FilterState::new(true, "", "");
        assert_eq!(encode(&state), "#show_red_only=1");
    }

    #[test]
    fn test_encode_escapes_search_but_not_category() {
        let state = FilterState::new(false, "e-shop", "bank of x&y=z");
        assert_eq!(encode(&state), "#category=e-shop&search=bank%20of%20x%26y%3Dz");
    }

    #[test]
    fn test_encode_keeps_unreserved_marks() {
        let state = FilterState::new(false, "", "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode(&state), "#search=a-b_c.d!e~f*g'h(i)");
    }

    #[test]
    fn test_encode_utf8_search() {
        let state = FilterState::new(false, "", "ziņas");
        assert_eq!(encode(&state), "#search=zi%C5%86as");
    }

    #[test]
    fn test_parse_last_occurrence_wins() {
        let params = FragmentParams::parse("#category=news&category=tech");
        assert_eq!(params.get("category"), Some("tech"));
    }

    #[test]
    fn test_parse_token_without_equals() {
        let params = FragmentParams::parse("#show_red_only&category=news");
        assert_eq!(params.get("show_red_only"), Some(""));
        let state = params.to_state();
        assert!(!state.show_red_only);
        assert_eq!(state.category, "news");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let params = FragmentParams::parse("#search=a=b");
        assert_eq!(params.get("search"), Some("a=b"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys_and_empty_tokens() {
        let state = FilterState::from_fragment("#&utm=1&&category=tech&");
        assert_eq!(state, FilterState::new(false, "tech", ""));
    }

    #[test]
    fn test_parse_empty_fragments() {
        assert!(FragmentParams::parse("").is_empty());
        assert!(FragmentParams::parse("#").is_empty());
        assert_eq!(FilterState::from_fragment("#"), FilterState::default());
    }

    #[test]
    fn test_show_red_only_requires_literal_one() {
        assert!(FilterState::from_fragment("#show_red_only=1").show_red_only);
        assert!(!FilterState::from_fragment("#show_red_only=true").show_red_only);
        assert!(!FilterState::from_fragment("#show_red_only=0").show_red_only);
    }

    #[test]
    fn test_round_trip_with_reserved_characters() {
        let state = FilterState::new(true, "news", "bank of x");
        assert_eq!(FilterState::from_fragment(&state.to_fragment()), state);

        let state = FilterState::new(false, "tech", "a&b=c #d%e");
        assert_eq!(FilterState::from_fragment(&state.to_fragment()), state);
    }
}
