//! Scoped authentication session and the identity-provider seam

use async_trait::async_trait;
use leo_core::types::Admin;
use leo_core::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Source of bearer tokens from the external identity provider
///
/// The provider owns credential storage and renewal; the client only asks for
/// the current token and, on a 401, for one forced refresh.
#[async_trait]
pub trait TokenProvider: Send + Sync + std::fmt::Debug {
    /// Current bearer token, possibly cached
    async fn token(&self) -> Result<String>;

    /// Force-refresh and return a new bearer token
    async fn refresh(&self) -> Result<String>;
}

/// Provider for a fixed token injected via config or environment
///
/// Used by the CLI and by tests. A fixed token cannot be renewed, so a
/// refresh request reports the credential as expired.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Wrap a fixed bearer token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String> {
        if self.token.is_empty() {
            return Err(Error::Authentication(
                "no bearer token configured".to_string(),
            ));
        }
        Ok(self.token.clone())
    }

    async fn refresh(&self) -> Result<String> {
        Err(Error::Authentication(
            "static token expired and cannot be refreshed".to_string(),
        ))
    }
}

/// An authenticated dashboard session
///
/// Created at sign-in, passed explicitly to everything that performs
/// authenticated I/O, and invalidated at logout. The admin role record is
/// fetched once when the session is established and cached here; token
/// expiry is handled separately via [`TokenProvider::refresh`].
#[derive(Debug)]
pub struct AuthSession {
    provider: Arc<dyn TokenProvider>,
    admin: RwLock<Option<Admin>>,
    invalidated: AtomicBool,
}

impl AuthSession {
    /// Open a session backed by the given token provider
    #[must_use]
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            provider,
            admin: RwLock::new(None),
            invalidated: AtomicBool::new(false),
        }
    }

    /// Current bearer token
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the session has been invalidated
    /// or the provider cannot produce a token.
    pub async fn token(&self) -> Result<String> {
        self.ensure_active()?;
        self.provider.token().await
    }

    /// Force a token refresh after a 401
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the session has been invalidated
    /// or the provider cannot renew the credential.
    pub async fn refresh(&self) -> Result<String> {
        self.ensure_active()?;
        self.provider.refresh().await
    }

    /// Cache the admin record fetched at session establishment
    pub fn set_admin(&self, admin: Admin) {
        let mut guard = self
            .admin
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(admin);
    }

    /// Cached admin record, if the session has been established
    #[must_use]
    pub fn admin(&self) -> Option<Admin> {
        self.admin
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the session has an established admin identity
    #[must_use]
    pub fn is_established(&self) -> bool {
        !self.invalidated.load(Ordering::Acquire) && self.admin().is_some()
    }

    /// End the session; all further token requests fail
    pub fn invalidate(&self) {
        self.invalidated.store(true, Ordering::Release);
        let mut guard = self
            .admin
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    fn ensure_active(&self) -> Result<()> {
        if self.invalidated.load(Ordering::Acquire) {
            return Err(Error::Authentication("session invalidated".to_string()));
        }
        Ok(())
    }
}
