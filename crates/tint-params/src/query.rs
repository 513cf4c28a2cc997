//! `application/x-www-form-urlencoded` query reader.
//!
//! Behaves like browser `URLSearchParams`: leading `?` optional, `+` is a
//! space, percent escapes decoded (invalid UTF-8 replaced), first occurrence
//! of a key wins on lookup.

use url::form_urlencoded;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Value of the first pair named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_question_mark() {
        let a = QueryParams::parse("?b=0088ff&f=0,ffcc33");
        let b = QueryParams::parse("b=0088ff&f=0,ffcc33");
        assert_eq!(a, b);
        assert_eq!(a.get("b"), Some("0088ff"));
        assert_eq!(a.get("f"), Some("0,ffcc33"));
        assert_eq!(a.get("m"), None);
    }

    #[test]
    fn key_without_value_is_present_and_empty() {
        let q = QueryParams::parse("?b&m=");
        assert!(q.has("b"));
        assert_eq!(q.get("b"), Some(""));
        assert_eq!(q.get("m"), Some(""));
    }

    #[test]
    fn decodes_plus_and_percent() {
        let q = QueryParams::parse("?b=10,+20,%2030&m=rgb%281%2C2%2C3%29");
        assert_eq!(q.get("b"), Some("10, 20, 30"));
        assert_eq!(q.get("m"), Some("rgb(1,2,3)"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let q = QueryParams::parse("?b=%FF0088ff");
        assert_eq!(q.get("b"), Some("\u{FFFD}0088ff"));
    }

    #[test]
    fn first_duplicate_wins() {
        let q = QueryParams::parse("?b=111&b=222");
        assert_eq!(q.get("b"), Some("111"));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn empty_query() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert!(QueryParams::parse("?&&").is_empty());
    }
}
