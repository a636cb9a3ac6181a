//! Authenticated HTTP transport for the Leo backend

use crate::auth::AuthSession;
use leo_core::config::ApiConfig;
use leo_core::{Error, Result};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// HTTP client for making authenticated requests to the Leo backend
///
/// Every request carries `Authorization: Bearer <token>` plus JSON
/// content-type and accept headers. A 401 triggers exactly one silent token
/// refresh-and-retry; a second 401 surfaces as an authentication error.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Arc<AuthSession>,
}

impl HttpClient {
    /// Create a client from the API configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig, session: Arc<AuthSession>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session this client authenticates with
    #[must_use]
    pub const fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    /// Perform a GET and deserialize the JSON response
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds non-2xx,
    /// or the response cannot be parsed.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let response = self.execute(Method::GET, path, query, None).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Failed to parse response from {path}: {e}")))
    }

    /// Send a JSON body and deserialize the JSON response
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds non-2xx,
    /// or the response cannot be parsed.
    pub async fn send_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let payload = match body {
            Some(value) => Some(serde_json::to_value(value)?),
            None => None,
        };
        let response = self.execute(method, path, &[], payload).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Failed to parse response from {path}: {e}")))
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let url = self.build_url(path, query);
        let mut token = self.session.token().await?;
        let mut retry = true;

        loop {
            let mut request = self
                .client
                .request(method.clone(), &url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .bearer_auth(&token);

            if let Some(ref payload) = body {
                request = request.json(payload);
            }

            let response = request
                .send()
                .await
                .map_err(|e| Error::Http(format!("Request to {path} failed: {e}")))?;

            let status = response.status();

            if status == StatusCode::UNAUTHORIZED && retry {
                warn!(path, "token rejected, attempting refresh");
                token = self.session.refresh().await?;
                retry = false;
                continue;
            }

            if !status.is_success() {
                return Err(Self::error_from_response(status, response).await);
            }

            return Ok(response);
        }
    }

    fn build_url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(name, value)| {
                    format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
                })
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }

        url
    }

    async fn error_from_response(status: StatusCode, response: reqwest::Response) -> Error {
        let body = response.text().await.unwrap_or_default();

        // Error bodies are `{"message": ...}` by convention; fall back to the
        // raw body, then the canonical status text.
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                } else {
                    body.trim().to_string()
                }
            });

        if status == StatusCode::UNAUTHORIZED {
            Error::Authentication(message)
        } else {
            Error::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}
