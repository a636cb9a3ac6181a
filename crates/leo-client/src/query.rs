//! Query state for paginated list views

use std::collections::BTreeMap;

/// A single filter value on a list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Boolean toggle. Only `true` is serialized; `false` means "no
    /// constraint" and is dropped from the query string.
    Flag(bool),

    /// Enum-like text value (e.g. `status=pending`)
    Text(String),

    /// Numeric value (e.g. `talkgroup`-style id filters)
    Number(i64),
}

impl FilterValue {
    /// Value to serialize into the query string, or `None` when the filter
    /// carries no constraint
    #[must_use]
    pub fn as_query_value(&self) -> Option<String> {
        match self {
            Self::Flag(true) => Some("true".to_string()),
            Self::Flag(false) => None,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Self::Number(n) => Some(n.to_string()),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Current page, search text, and filters for one list view
///
/// Setters never perform I/O; the caller decides when to fetch. Changing the
/// search text or any filter resets the page to 1 so a narrowed result set is
/// always entered from its first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page: u32,
    search: String,
    filters: BTreeMap<String, FilterValue>,
}

impl QueryState {
    /// Create query state positioned on the first page with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            search: String::new(),
            filters: BTreeMap::new(),
        }
    }

    /// Current page (1-based)
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Current search text
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current value of a named filter
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&FilterValue> {
        self.filters.get(name)
    }

    /// Move to a page; pages below 1 are treated as 1
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Replace the search text, resetting to the first page
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Set a named filter, resetting to the first page
    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.filters.insert(name.into(), value.into());
        self.page = 1;
    }

    /// Remove a named filter, resetting to the first page
    pub fn remove_filter(&mut self, name: &str) {
        self.filters.remove(name);
        self.page = 1;
    }

    /// Drop all filters and search text, resetting to the first page
    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.clear();
        self.page = 1;
    }

    /// Serialize into query-string pairs
    ///
    /// Emits `page` and `limit` first, `search` when non-empty, then filters
    /// in name order. Pairs never contain empty values: an unset or `false`
    /// filter is absent rather than serialized, so it cannot accidentally
    /// narrow results.
    #[must_use]
    pub fn to_query_pairs(&self, limit: u32) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search".to_string(), search.to_string()));
        }

        for (name, value) in &self.filters {
            if let Some(serialized) = value.as_query_value() {
                pairs.push((name.clone(), serialized));
            }
        }

        pairs
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}
