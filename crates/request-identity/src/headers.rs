//! Header-style key/value map and the identity key families.
//!
//! Each logical identifier is read from (and written back under) a small
//! family of synonymous keys: a plain name, an `x-` prefixed name, and for
//! the tracing fields the matching B3 propagation header.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Keys consulted (and populated) for the correlation id.
pub const CORRELATION_ID_KEYS: [&str; 2] = ["correlation-id", "x-correlation-id"];
/// Keys consulted (and populated) for the parent span id.
pub const PARENT_ID_KEYS: [&str; 3] = ["parent-id", "x-parent-id", "x-b3-parentspanid"];
/// Keys consulted (and populated) for the request id.
pub const REQUEST_ID_KEYS: [&str; 2] = ["request-id", "x-request-id"];
/// Keys consulted (and populated) for the session id.
pub const SESSION_ID_KEYS: [&str; 2] = ["session-id", "x-session-id"];
/// Keys consulted (and populated) for the span id.
pub const SPAN_ID_KEYS: [&str; 3] = ["span-id", "x-span-id", "x-b3-spanid"];
/// Keys consulted (and populated) for the trace id.
pub const TRACE_ID_KEYS: [&str; 3] = ["trace-id", "x-trace-id", "x-b3-traceid"];

/// A header-style string map with case-insensitive keys.
///
/// `insert` normalizes keys to lowercase and replaces any case-variant
/// already present, so merging resolved identity headers over a response
/// always overwrites rather than duplicating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into().to_ascii_lowercase();
        self.0.retain(|k, _| !k.eq_ignore_ascii_case(&key));
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// First non-empty value among the given key family, in family order.
    ///
    /// An empty string is treated as absent, matching the fallback chains'
    /// "non-empty, defined string" rule.
    pub fn first_non_empty(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
    }

    /// Merge `other` into `self`; `other`'s entries win on key conflicts.
    pub fn extend(&mut self, other: Headers) {
        for (key, value) in other.0 {
            self.insert(key, value);
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (key, value) in iter {
            headers.insert(key, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let headers: Headers = [("X-Trace-ID", "abc")].into_iter().collect();
        assert_eq!(headers.get("x-trace-id"), Some("abc"));
        assert_eq!(headers.get("X-TRACE-ID"), Some("abc"));
    }

    #[test]
    fn test_insert_replaces_case_variants() {
        let mut headers = Headers::new();
        headers.insert("X-Request-ID", "old");
        headers.insert("x-request-id", "new");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("x-request-id"), Some("new"));
    }

    #[test]
    fn test_first_non_empty_skips_empty_values() {
        let headers: Headers = [("trace-id", ""), ("x-b3-traceid", "b3value")]
            .into_iter()
            .collect();
        assert_eq!(headers.first_non_empty(&TRACE_ID_KEYS), Some("b3value"));
        assert_eq!(headers.first_non_empty(&SESSION_ID_KEYS), None);
    }

    #[test]
    fn test_extend_overwrites_existing_entries() {
        let mut base: Headers = [("Span-ID", "stale"), ("content-type", "text/plain")]
            .into_iter()
            .collect();
        let incoming: Headers = [("span-id", "fresh")].into_iter().collect();
        base.extend(incoming);
        assert_eq!(base.get("span-id"), Some("fresh"));
        assert_eq!(base.get("content-type"), Some("text/plain"));
        assert_eq!(base.len(), 2);
    }
}
