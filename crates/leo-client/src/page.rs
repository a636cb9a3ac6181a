//! Page data and wire-format parsing for list endpoints

use serde::Deserialize;

/// One fetched page of a resource collection
///
/// A page fully replaces its predecessor on every fetch; there is no
/// incremental merging. `total` is the server-side count across all pages of
/// the filtered collection, absent for legacy endpoints that return a bare
/// array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePage<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,

    /// Page number (1-based)
    pub page: u32,

    /// Requested page size
    pub limit: u32,

    /// Total filtered count, when the endpoint reports one
    pub total: Option<u64>,
}

impl<T> ResourcePage<T> {
    /// An empty first page
    #[must_use]
    pub const fn empty(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            limit,
            total: Some(0),
        }
    }

    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Envelope shape returned by current list endpoints
///
/// The server also sends a precomputed `pages` field; it is accepted and
/// ignored, the client recomputes page counts from `total` and `limit`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    /// Page number echoed by the server (1-based)
    pub page: u32,

    /// Page size echoed by the server
    pub limit: u32,

    /// Total filtered count across all pages
    pub total: u64,

    /// Server-computed page count (ignored)
    #[serde(default)]
    pub pages: Option<u32>,

    /// Items on this page
    pub data: Vec<T>,
}

/// A list response in either wire format
///
/// Current endpoints return the `{page, limit, total, pages, data}` envelope;
/// a few legacy endpoints still return a bare array. Both normalize into a
/// [`ResourcePage`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// Enveloped response with pagination metadata
    Envelope(ListEnvelope<T>),

    /// Legacy bare-array response
    Legacy(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Normalize into a [`ResourcePage`]
    ///
    /// Envelope responses carry their own page/limit/total; a legacy array
    /// adopts the requested page and limit and reports no total, which
    /// switches the pager to its items-equals-limit heuristic.
    #[must_use]
    pub fn into_page(self, requested_page: u32, requested_limit: u32) -> ResourcePage<T> {
        match self {
            Self::Envelope(envelope) => ResourcePage {
                items: envelope.data,
                page: envelope.page.max(1),
                limit: envelope.limit.max(1),
                total: Some(envelope.total),
            },
            Self::Legacy(items) => ResourcePage {
                items,
                page: requested_page.max(1),
                limit: requested_limit.max(1),
                total: None,
            },
        }
    }
}
