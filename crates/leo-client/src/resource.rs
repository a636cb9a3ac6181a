//! The generic binding between a backend collection and the list controller

use leo_core::types::AuthId;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Identifies one item for mutation
///
/// Top-level documents are addressed by id. Products and specials are stored
/// embedded inside their business document, so they are addressed by the
/// owning account plus their position in the embedded array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKey {
    /// A top-level document id
    Document(String),

    /// An entry embedded in a business document
    Embedded {
        /// Owning business account
        owner: AuthId,
        /// Position within the embedded array
        index: usize,
    },
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document(id) => write!(f, "{id}"),
            Self::Embedded { owner, index } => write!(f, "{owner}[{index}]"),
        }
    }
}

/// Value of a toggleable field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Boolean toggle (`approved`, `is_featured`, ...)
    Bool(bool),

    /// Enum-like text (`enrollment_status`, `status`, ...)
    Text(String),
}

impl FieldValue {
    /// JSON representation for the partial-update body
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Access to the named fields an admin can toggle on a record
///
/// `get_field` returns the current value so the controller can capture it
/// before an optimistic write and restore it on rollback. `set_field` rejects
/// unknown field names and unparsable enum text, returning `false` without
/// touching the record.
pub trait MutableRecord {
    /// Current value of a mutable field, or `None` for unknown fields
    fn get_field(&self, name: &str) -> Option<FieldValue>;

    /// Apply a value to a mutable field; `false` when rejected
    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool;
}

/// Binds an item type to its backend collection
///
/// One implementation per admin list view; the controller is generic over
/// this trait, so pagination, fetching, and optimistic mutation are written
/// once.
pub trait AdminResource {
    /// Item type for this collection
    type Item: DeserializeOwned + MutableRecord + Clone + Send + Sync;

    /// Collection name used in logs and error messages
    const NAME: &'static str;

    /// Page size for this list view
    const PAGE_SIZE: u32;

    /// Path of the list endpoint, relative to the API base
    fn list_path() -> String;

    /// Key for addressing an item in a mutation
    fn item_key(item: &Self::Item) -> ItemKey;

    /// Path of the mutation endpoint for one item
    fn mutate_path(key: &ItemKey) -> String;

    /// HTTP method for field mutations
    ///
    /// `PATCH` by convention; the business endpoint still takes `PUT`.
    fn mutate_method() -> Method {
        Method::PATCH
    }
}

/// Parse enum-like text through serde so wire names stay authoritative
pub(crate) fn parse_enum<T: DeserializeOwned>(text: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(text.to_string())).ok()
}

/// Serialize an enum back to its wire name
pub(crate) fn enum_text<T: serde::Serialize>(value: &T) -> Option<String> {
    match serde_json::to_value(value).ok()? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}
