//! Search filters.

use serde::{Deserialize, Serialize};

/// Optional category and free-text filters for a catalog search.
///
/// Absent and empty filters behave identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Vendor category, matched case-insensitively and exactly.
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text query, matched as a case-insensitive substring of the product name.
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to vendors in a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// The trimmed, lower-cased query, or `None` if it is absent or blank.
    pub fn normalized_query(&self) -> Option<String> {
        normalize_query(self.query.as_deref())
    }

    /// The trimmed category, or `None` if it is absent or blank.
    pub fn normalized_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Whether this search is query-driven (and so carries the lowest-price badge).
    pub fn has_query(&self) -> bool {
        self.normalized_query().is_some()
    }
}

pub(crate) fn normalize_query(query: Option<&str>) -> Option<String> {
    query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty())
}
