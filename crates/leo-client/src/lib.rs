//! Paginated resource client for the Leo admin dashboard
//!
//! Every admin list view follows the same cycle: hold query state, fetch one
//! page over authenticated HTTP, render it, and confirm individual field
//! toggles optimistically. This crate implements that cycle once —
//! [`controller::ListController`] parameterized by [`resource::AdminResource`]
//! — plus the scoped [`auth::AuthSession`] and the typed non-list endpoints
//! in [`admin::AdminApi`].

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod admin;
pub mod auth;
pub mod controller;
pub mod http;
pub mod page;
pub mod pager;
pub mod query;
pub mod resource;
pub mod resources;

// Re-export the working set
pub use admin::{AdminApi, BusinessUpdate, NewReview, ReferralProfileUpdate};
pub use auth::{AuthSession, StaticTokenProvider, TokenProvider};
pub use controller::{FetchTicket, ListController};
pub use http::HttpClient;
pub use page::{ListResponse, ResourcePage};
pub use pager::Pager;
pub use query::{FilterValue, QueryState};
pub use resource::{AdminResource, FieldValue, ItemKey, MutableRecord};
