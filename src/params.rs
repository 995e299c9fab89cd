//! Route parameters.
//!
//! [`RouteParams`] is the string-to-string map a route produces when it
//! matches a URL. The same type carries the parameters a caller *expects*
//! for a URL, so actual and expected sides can be diffed key by key.
//!
//! # Example
//!
//! ```
//! use route_tester::RouteParams;
//!
//! let params = RouteParams::new()
//!     .with("controller", "blog")
//!     .with("id", "5");
//!
//! assert_eq!(params.get("id"), Some("5"));
//! assert_eq!(params.get_as::<u32>("id"), Some(5));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which the matched route's identifier is recorded.
pub const ROUTE_KEY: &str = "route";

/// Parameters extracted from (or expected for) a URL.
///
/// Ordering of keys carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Get a parameter and parse it as a specific type
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.params.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over parameter names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Iterate over all `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Merge `base` with `overrides`.
    ///
    /// Values from `overrides` win on collision. Routes use this to lay
    /// captured segments over their defaults.
    ///
    /// ```
    /// use route_tester::RouteParams;
    ///
    /// let defaults = RouteParams::new().with("action", "index").with("controller", "blog");
    /// let captured = RouteParams::new().with("action", "article");
    ///
    /// let merged = RouteParams::merge(&defaults, &captured);
    /// assert_eq!(merged.get("action"), Some("article"));
    /// assert_eq!(merged.get("controller"), Some("blog"));
    /// ```
    pub fn merge(base: &RouteParams, overrides: &RouteParams) -> RouteParams {
        let mut merged = base.clone();
        for (key, value) in overrides.iter() {
            merged.insert(key, value);
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.params
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for RouteParams {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
