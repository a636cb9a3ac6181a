//! Common test utilities and fixtures for integration tests

use leo_client::{AuthSession, HttpClient, StaticTokenProvider, TokenProvider};
use leo_core::config::ApiConfig;
use std::sync::Arc;
use wiremock::MockServer;

pub mod fixtures;
pub mod helpers;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use helpers::*;

/// A mocked Leo backend plus a client wired to it
pub struct TestBackend {
    pub server: MockServer,
}

impl TestBackend {
    /// Start a fresh mock backend
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock backend
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Client authenticated with a fixed token
    pub fn client(&self, token: &str) -> HttpClient {
        let session = Arc::new(AuthSession::new(Arc::new(StaticTokenProvider::new(token))));
        self.client_with_session(session)
    }

    /// Client authenticated through an arbitrary provider
    pub fn client_with_provider(&self, provider: Arc<dyn TokenProvider>) -> HttpClient {
        self.client_with_session(Arc::new(AuthSession::new(provider)))
    }

    fn client_with_session(&self, session: Arc<AuthSession>) -> HttpClient {
        let config = ApiConfig {
            base_url: self.base_url(),
            request_timeout: 5,
            user_agent: "leo-admin/test".to_string(),
        };
        HttpClient::new(&config, session).expect("failed to build test client")
    }
}
