//! Paddle HTTP client implementation.

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

use paddle_core::{Envelope, ErrorEnvelope, EventType, Price, Product};

use crate::config::PaddleConfig;
use crate::crudp::Crudp;
use crate::error::PaddleError;
use crate::resource::Resource;

/// Path of the webhook event type listing.
pub const EVENT_TYPES_PATH: &str = "/event-types";

/// Paddle API client.
///
/// Owns its configuration and HTTP connection pool. Independent clients with
/// different keys or environments can live side by side.
#[derive(Clone)]
pub struct PaddleClient {
    http: Client,
    config: PaddleConfig,
    headers: HeaderMap,
}

impl fmt::Debug for PaddleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaddleClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PaddleClient {
    /// Create a client for the sandbox (`test_mode = true`) or production.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or not a valid header value,
    /// or if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, test_mode: bool) -> Result<Self, PaddleError> {
        Self::with_config(PaddleConfig::new(api_key).with_test_mode(test_mode))
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn with_config(config: PaddleConfig) -> Result<Self, PaddleError> {
        config.validate()?;
        let headers = config.headers()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        tracing::debug!(
            environment = ?config.environment(),
            base_url = %config.base_url(),
            api_version = config.api_version(),
            "Paddle client configured"
        );

        Ok(Self {
            http,
            config,
            headers,
        })
    }

    /// Replace the HTTP client, e.g. to add a proxy.
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// The client's configuration.
    #[must_use]
    pub const fn config(&self) -> &PaddleConfig {
        &self.config
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// CRUD and pagination access to any resource type.
    #[must_use]
    pub fn resource<R: Resource>(&self) -> Crudp<'_, R> {
        Crudp::new(self)
    }

    /// Products (`/products`).
    #[must_use]
    pub fn products(&self) -> Crudp<'_, Product> {
        self.resource()
    }

    /// Prices (`/prices`).
    #[must_use]
    pub fn prices(&self) -> Crudp<'_, Price> {
        self.resource()
    }

    /// List the webhook event types the API can emit.
    ///
    /// The endpoint is not paginated; the envelope's `data` array is
    /// returned as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn event_types(&self) -> Result<Vec<EventType>, PaddleError> {
        let envelope: Envelope<Vec<EventType>> =
            self.get(EVENT_TYPES_PATH, None::<&()>).await?;
        Ok(envelope.data)
    }

    pub(crate) async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, PaddleError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.request(Method::GET, path);
        if let Some(query) = query {
            request = request.query(query);
        }
        self.execute(Method::GET, path, request).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, PaddleError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(method.clone(), path).json(body);
        self.execute(method, path, request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.config.url(path))
            .headers(self.headers.clone())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, PaddleError> {
        tracing::debug!(method = %method, path = %path, "Sending Paddle request");

        let response = request.send().await.map_err(|e| {
            tracing::error!(method = %method, path = %path, error = %e, "Paddle request failed");
            PaddleError::Transport(e)
        })?;

        tracing::debug!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            "Paddle response received"
        );

        self.handle_response(path, response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, PaddleError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice(&body).map_err(|e| {
                let snippet = truncate_body(&body);
                tracing::error!(path = %path, error = %e, body = %snippet, "Failed to decode Paddle response");
                PaddleError::Decode(format!("{e}: {snippet}"))
            });
        }

        Err(map_error_status(path, status, &body))
    }
}

/// Map a non-success response onto the error taxonomy.
fn map_error_status(path: &str, status: StatusCode, body: &[u8]) -> PaddleError {
    match status {
        StatusCode::BAD_REQUEST => match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                tracing::warn!(
                    path = %path,
                    code = %envelope.error.code,
                    detail = %envelope.error.detail,
                    "Paddle rejected request"
                );
                PaddleError::BadRequest {
                    code: envelope.error.code,
                    detail: envelope.error.detail,
                }
            }
            Err(_) => {
                tracing::warn!(path = %path, body = %truncate_body(body), "Unparseable 400 response");
                PaddleError::Http {
                    status: status.as_u16(),
                }
            }
        },
        StatusCode::NOT_FOUND => {
            tracing::warn!(path = %path, "Paddle resource not found");
            PaddleError::NotFound {
                path: path.to_string(),
            }
        }
        _ => {
            tracing::warn!(
                path = %path,
                status = status.as_u16(),
                body = %truncate_body(body),
                "Paddle request failed with status"
            );
            PaddleError::Http {
                status: status.as_u16(),
            }
        }
    }
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX {
        return text.into_owned();
    }
    let mut end = MAX;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &text[..end])
}
