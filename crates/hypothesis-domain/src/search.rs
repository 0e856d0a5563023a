//! Search filters
//!
//! Filter keys are passed to the service unmodified. The service decides
//! which keys it understands (`forum`, `status`, `tags`, `page`, `limit`, ...),
//! so the only client-side rule is that keys are non-empty.

use crate::validation::ValidationError;
use std::collections::BTreeMap;

/// Value of a single search filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A single value (`status=open`)
    Single(String),
    /// Several values, sent as a repeated key (`tags=a&tags=b`)
    Many(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Single(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Many(values)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        FilterValue::Many(values.into_iter().map(String::from).collect())
    }
}

/// Free-form search filters keyed by parameter name
///
/// # Examples
///
/// ```
/// use hypothesis_domain::SearchFilters;
///
/// let filters = SearchFilters::new()
///     .with("status", "open")
///     .with("tags", vec!["qec", "surface-code"])
///     .page(2);
///
/// let pairs = filters.query_pairs();
/// assert!(pairs.contains(&("status".to_string(), "open".to_string())));
/// assert!(pairs.contains(&("page".to_string(), "2".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    entries: BTreeMap<String, FilterValue>,
}

impl SearchFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a filter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a filter in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Request a result page (1-based)
    pub fn page(self, page: u32) -> Self {
        self.with("page", page.to_string())
    }

    /// Limit the page size
    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit.to_string())
    }

    /// Look up a filter
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.get(key)
    }

    /// Number of filter keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no filters are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every key is non-blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.entries.keys().any(|key| key.trim().is_empty()) {
            return Err(ValidationError::single(
                "filters",
                "filter keys must not be empty",
            ));
        }
        Ok(())
    }

    /// Flatten into `(key, value)` pairs; list values repeat their key
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                FilterValue::Single(v) => pairs.push((key.clone(), v.clone())),
                FilterValue::Many(values) => {
                    pairs.extend(values.iter().map(|v| (key.clone(), v.clone())));
                }
            }
        }
        pairs
    }
}

/// Validate a free-text search query
pub fn validate_query(query: &str) -> Result<(), ValidationError> {
    if query.trim().is_empty() {
        return Err(ValidationError::single("query", "must not be empty"));
    }
    Ok(())
}

impl<K, V> FromIterator<(K, V)> for SearchFilters
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut filters = SearchFilters::new();
        for (key, value) in iter {
            filters.insert(key, value);
        }
        filters
    }
}
