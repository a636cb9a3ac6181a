//! Generic paginated list controller with optimistic field mutation
//!
//! One controller instance backs one admin list view. The same
//! fetch/replace/mutate cycle the dashboard repeats on every page lives here
//! once, parameterized by [`AdminResource`].

use crate::http::HttpClient;
use crate::page::{ListResponse, ResourcePage};
use crate::pager::Pager;
use crate::query::{FilterValue, QueryState};
use crate::resource::{AdminResource, FieldValue, ItemKey};
use leo_core::{Error, Result};
use tracing::{debug, warn};

/// Handle for one in-flight fetch
///
/// Issued by [`ListController::begin_fetch`]; a completion is applied only if
/// its ticket is still the newest, so a slow response can never overwrite a
/// newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

/// Paginated list controller for one resource collection
///
/// Holds the query state, the most recently applied page, and the transient
/// view state (loading flag, last error). All mutation of that state happens
/// through `complete_fetch`/`mutate_field`, so a fetch failure leaves the
/// previous page visible and the loading flag can never stay stuck.
#[derive(Debug)]
pub struct ListController<R: AdminResource> {
    http: HttpClient,
    query: QueryState,
    limit: u32,
    current: Option<ResourcePage<R::Item>>,
    loading: bool,
    last_error: Option<String>,
    seq: u64,
}

impl<R: AdminResource> ListController<R> {
    /// Create a controller using the resource's default page size
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            query: QueryState::new(),
            limit: R::PAGE_SIZE,
            current: None,
            loading: false,
            last_error: None,
            seq: 0,
        }
    }

    /// Override the page size for this view
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Current query state
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// Items of the most recently applied page
    #[must_use]
    pub fn items(&self) -> &[R::Item] {
        self.current.as_ref().map_or(&[], |page| page.items.as_slice())
    }

    /// The most recently applied page
    #[must_use]
    pub const fn current_page(&self) -> Option<&ResourcePage<R::Item>> {
        self.current.as_ref()
    }

    /// Pagination state for the current view
    #[must_use]
    pub fn pager(&self) -> Pager {
        self.current.as_ref().map_or_else(
            || Pager {
                page: self.query.page(),
                limit: self.limit,
                total: None,
                items_on_page: 0,
            },
            Pager::from_page,
        )
    }

    /// Whether a fetch is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the most recent failed fetch, cleared by the next success
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the search text (no fetch; page resets to 1)
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.set_search(text);
    }

    /// Set a filter (no fetch; page resets to 1)
    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.query.set_filter(name, value);
    }

    /// Remove a filter (no fetch; page resets to 1)
    pub fn remove_filter(&mut self, name: &str) {
        self.query.remove_filter(name);
    }

    /// Move to a page without fetching (the caller refreshes)
    pub fn set_page(&mut self, page: u32) {
        self.query.set_page(page);
    }

    /// Start a fetch: bumps the sequence number and raises the loading flag
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.seq += 1;
        self.loading = true;
        FetchTicket { seq: self.seq }
    }

    /// Perform the list request for the current query state
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed. State is untouched either way; pair with
    /// [`Self::begin_fetch`]/[`Self::complete_fetch`].
    pub async fn fetch(&self) -> Result<ResourcePage<R::Item>> {
        let pairs = self.query.to_query_pairs(self.limit);
        debug!(
            resource = R::NAME,
            page = self.query.page(),
            limit = self.limit,
            "fetching page"
        );

        let response: ListResponse<R::Item> = self.http.get_json(&R::list_path(), &pairs).await?;
        Ok(response.into_page(self.query.page(), self.limit))
    }

    /// Apply a fetch outcome
    ///
    /// A stale ticket (a newer fetch has begun since) is discarded and
    /// `Ok(false)` returned; the loading flag is left to the newer fetch. A
    /// current ticket settles the view: success replaces the page atomically
    /// and clears the error; failure records the error and keeps the
    /// previous page.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error after recording it.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ResourcePage<R::Item>>,
    ) -> Result<bool> {
        if ticket.seq != self.seq {
            debug!(
                resource = R::NAME,
                stale = ticket.seq,
                current = self.seq,
                "discarding stale list response"
            );
            return Ok(false);
        }

        self.loading = false;

        match result {
            Ok(page) => {
                if page.len() > page.limit as usize {
                    warn!(
                        resource = R::NAME,
                        returned = page.len(),
                        limit = page.limit,
                        "server returned more items than the page limit"
                    );
                }
                self.current = Some(page);
                self.last_error = None;
                Ok(true)
            }
            Err(err) => {
                warn!(resource = R::NAME, error = %err, "list fetch failed");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch and apply the current query state
    ///
    /// # Errors
    ///
    /// Returns the fetch error after recording it; the previous page remains
    /// visible and the loading flag is cleared.
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.begin_fetch();
        let result = self.fetch().await;
        self.complete_fetch(ticket, result).map(|_| ())
    }

    /// Advance to the next page, if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch for the new page fails.
    pub async fn next_page(&mut self) -> Result<bool> {
        let Some(next) = self.pager().next_page() else {
            return Ok(false);
        };
        self.query.set_page(next);
        self.refresh().await?;
        Ok(true)
    }

    /// Go back to the previous page, if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch for the new page fails.
    pub async fn prev_page(&mut self) -> Result<bool> {
        let Some(prev) = self.pager().prev_page() else {
            return Ok(false);
        };
        self.query.set_page(prev);
        self.refresh().await?;
        Ok(true)
    }

    /// Jump to a page, clamped into the known page range
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch for the new page fails.
    pub async fn goto_page(&mut self, requested: u32) -> Result<()> {
        let clamped = self.pager().clamp(requested);
        self.query.set_page(clamped);
        self.refresh().await
    }

    /// Optimistically set one field on one item, confirming with the server
    ///
    /// The new value is applied locally first, then sent as a partial-field
    /// update. If the server rejects it, the captured previous value is
    /// restored on the same matched item and the error returned. At most one
    /// field transitions per call; there is no batching.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the key is not on the current page,
    /// `UnknownField`/`Validation` for a field the item rejects, or the
    /// transport/API error after rollback.
    pub async fn mutate_field(
        &mut self,
        key: &ItemKey,
        field: &str,
        value: FieldValue,
    ) -> Result<()> {
        use crate::resource::MutableRecord as _;

        let Some(page) = self.current.as_mut() else {
            return Err(Error::NotFound {
                resource: format!("{}/{key}", R::NAME),
            });
        };

        let Some(item) = page
            .items
            .iter_mut()
            .find(|item| R::item_key(item) == *key)
        else {
            return Err(Error::NotFound {
                resource: format!("{}/{key}", R::NAME),
            });
        };

        let Some(previous) = item.get_field(field) else {
            return Err(Error::UnknownField {
                resource: R::NAME.to_string(),
                field: field.to_string(),
            });
        };

        if !item.set_field(field, &value) {
            return Err(Error::Validation {
                field: field.to_string(),
                message: format!("value rejected by {}", R::NAME),
            });
        }

        let mut body = serde_json::Map::new();
        body.insert(field.to_string(), value.to_json());
        let body = serde_json::Value::Object(body);
        let path = R::mutate_path(key);

        debug!(resource = R::NAME, item = %key, field, "confirming field mutation");

        let outcome: Result<serde_json::Value> = self
            .http
            .send_json(R::mutate_method(), &path, Some(&body))
            .await;

        match outcome {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(
                    resource = R::NAME,
                    item = %key,
                    field,
                    error = %err,
                    "mutation rejected, rolling back"
                );
                if let Some(page) = self.current.as_mut() {
                    if let Some(item) = page
                        .items
                        .iter_mut()
                        .find(|item| R::item_key(item) == *key)
                    {
                        item.set_field(field, &previous);
                    }
                }
                Err(err)
            }
        }
    }
}
