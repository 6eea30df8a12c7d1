use std::fmt;

use serde::{Deserialize, Serialize};

/// Rows requested per launch page; offsets are always multiples of this.
pub const PAGE_SIZE: u32 = 20;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    FilterOptions,
    OrbitalAttempts,
    AttemptsByYear,
    Launches,
    Health,
    SchemaMeta,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::FilterOptions => "/api/meta/filters",
            Endpoint::OrbitalAttempts => "/api/stats/orbital_attempts",
            Endpoint::AttemptsByYear => "/api/stats/attempts_by_year",
            Endpoint::Launches => "/api/launches",
            Endpoint::Health => "/api/health",
            Endpoint::SchemaMeta => "/api/meta/schema",
        }
    }

    /// Full request URL; the `?` separator is only added for a non-empty query.
    pub fn url(self, base_url: &str, params: &QueryParams) -> String {
        let base_url = base_url.trim_end_matches('/');
        let query = build_query(params);
        if query.is_empty() {
            format!("{base_url}{}", self.path())
        } else {
            format!("{base_url}{}?{query}", self.path())
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Number(i64),
}

impl QueryValue {
    fn is_empty(&self) -> bool {
        matches!(self, QueryValue::Text(text) if text.is_empty())
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(text) => f.write_str(text),
            QueryValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Number(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Number(value)
    }
}

/// Sparse, insertion-ordered mapping of query field to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, keeping its original position when it is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<QueryValue>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, Some(value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&QueryValue>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    pub fn to_query_string(&self) -> String {
        build_query(self)
    }
}

impl<K: Into<String>> FromIterator<(K, Option<QueryValue>)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, Option<QueryValue>)>>(iter: T) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Serializes `params` as a form-urlencoded query string.
///
/// Absent and empty-string values are skipped; order follows insertion order.
pub fn build_query(params: &QueryParams) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        match value {
            Some(value) if !value.is_empty() => {
                serializer.append_pair(key, &value.to_string());
            }
            _ => {}
        }
    }
    serializer.finish()
}
