//! Test helper functions and utilities

use async_trait::async_trait;
use leo_client::TokenProvider;
use leo_core::{Error, Result};
use std::sync::{Mutex, Once, PoisonError};

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Token provider whose refresh rotates to the next queued token
///
/// Mirrors the identity provider's renew-on-expiry behavior: `token()` keeps
/// returning the current credential until a refresh swaps it.
#[derive(Debug)]
pub struct RotatingTokenProvider {
    current: Mutex<String>,
    queued: Mutex<Vec<String>>,
}

impl RotatingTokenProvider {
    /// Start with a current token and tokens to hand out on refresh, in order
    pub fn new(current: &str, queued: &[&str]) -> Self {
        let mut queue: Vec<String> = queued.iter().map(ToString::to_string).collect();
        queue.reverse(); // pop() yields in the given order
        Self {
            current: Mutex::new(current.to_string()),
            queued: Mutex::new(queue),
        }
    }
}

#[async_trait]
impl TokenProvider for RotatingTokenProvider {
    async fn token(&self) -> Result<String> {
        Ok(self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn refresh(&self) -> Result<String> {
        let next = self
            .queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .ok_or_else(|| Error::Authentication("no refreshed token available".to_string()))?;

        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *current = next.clone();
        Ok(next)
    }
}
