//! String-keyed parameter maps shared by query strings and form bodies.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Parameters for a query string or a form-encoded body.
///
/// Keys are kept sorted so the same parameters always encode to the same
/// bytes. Setting a key twice keeps the last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to the string form of `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` only when `value` is present. Absent values leave no entry,
    /// not even an empty placeholder.
    pub fn with_opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
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

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Serializes as `application/x-www-form-urlencoded`.
    pub fn to_form_urlencoded(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, Option<V>)> for Params {
    /// Builds params from optional values, dropping the absent ones.
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Params::new(), |params, (k, v)| params.with_opt(k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_value_is_kept() {
        let params = Params::new().with_opt("account_type", Some("uk_retail"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("account_type"), Some("uk_retail"));
    }

    #[test]
    fn absent_value_is_dropped() {
        let params = Params::new().with_opt("account_type", None::<&str>);
        assert!(params.is_empty());
        assert_eq!(params, Params::new());
    }

    #[test]
    fn values_are_stringified() {
        let params = Params::new()
            .with("limit", 50)
            .with_opt("expand", Some(true))
            .with_opt("since", None::<String>);
        assert_eq!(params.get("limit"), Some("50"));
        assert_eq!(params.get("expand"), Some("true"));
        assert!(!params.contains_key("since"));
    }

    #[test]
    fn collect_from_optional_pairs() {
        let params: Params = [("account_id", Some("acc_1")), ("before", None)]
            .into_iter()
            .collect();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("account_id"), Some("acc_1"));
    }

    #[test]
    fn later_value_overwrites() {
        let params = Params::new().with("k", "a").with("k", "b");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("k"), Some("b"));
    }

    #[test]
    fn form_encoding_escapes_reserved_characters() {
        let params = Params::new()
            .with("metadata[note]", "hello world & more")
            .with("url", "https://example.com/hook?x=1");
        assert_eq!(
            params.to_form_urlencoded(),
            "metadata%5Bnote%5D=hello+world+%26+more&url=https%3A%2F%2Fexample.com%2Fhook%3Fx%3D1"
        );
    }
}
