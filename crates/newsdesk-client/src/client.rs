//! HTTP transport with the bearer-token interceptor.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use newsdesk_auth::{TokenInspector, TokenState, TokenStore};
use newsdesk_core::config::AppConfig;
use newsdesk_core::error::AppError;

use crate::endpoint::Endpoints;
use crate::response::{decode, error_for_status, transport_error};
use crate::retry::RetryPolicy;

/// Message returned when a stored token has expired.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Client for the news platform API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    tokens: Arc<dyn TokenStore>,
    inspector: TokenInspector,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Creates a client from configuration and a token store.
    pub fn new(config: &AppConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(config.api.user_agent.clone())
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoints: Endpoints::new(&config.api.base_url)?,
            tokens,
            inspector: TokenInspector::new(&config.auth),
            retry: RetryPolicy::from_config(&config.api),
        })
    }

    /// Replaces the retry policy used for retryable reads.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Endpoint URL builder.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The token store shared with the caller.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Retry policy applied to retryable reads.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Whether a usable token is stored.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(match self.tokens.load().await? {
            Some(token) => matches!(self.inspector.inspect(&token), TokenState::Valid(_)),
            None => false,
        })
    }

    /// Attach the stored token to `request`.
    ///
    /// An expired token is cleared and the request refused. A token that
    /// cannot be decoded is cleared and the request goes out without it.
    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, AppError> {
        let Some(token) = self.tokens.load().await? else {
            return Ok(request);
        };

        match self.inspector.inspect(&token) {
            TokenState::Valid(_) => Ok(request.bearer_auth(token)),
            TokenState::Expired => {
                self.tokens.clear().await?;
                warn!("Stored token has expired, clearing it");
                Err(AppError::authentication(SESSION_EXPIRED_MESSAGE))
            }
            TokenState::Invalid => {
                self.tokens.clear().await?;
                error!("Stored token could not be decoded, clearing it");
                Ok(request)
            }
        }
    }

    /// Send a request and return the status with the raw body.
    ///
    /// Non-success statuses are turned into errors.
    pub(crate) async fn send_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<(StatusCode, String), AppError> {
        debug!(%method, %url, "Sending request");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.authorize(request).await?;

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        debug!(%method, %url, status = status.as_u16(), "Received response");

        if !status.is_success() {
            return Err(error_for_status(status, &text));
        }
        Ok((status, text))
    }

    /// Send a request and decode its JSON body.
    pub(crate) async fn send<B, T>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (_, text) = self.send_raw(method, url, body).await?;
        decode(&text)
    }

    /// `GET` with the retry policy applied.
    pub(crate) async fn get_with_retry<T: DeserializeOwned>(
        &self,
        what: &str,
        url: Url,
    ) -> Result<T, AppError> {
        self.retry
            .run(what, || self.send::<(), T>(Method::GET, url.clone(), None))
            .await
    }
}
