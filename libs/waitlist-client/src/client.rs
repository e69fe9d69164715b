//! HTTP client for the waitlist API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;
use waitlist_types::{ApiResponse, NewWaitlistEntry, WaitlistEntry};

use crate::error::ClientError;

/// Configuration for the waitlist client.
#[derive(Debug, Clone)]
pub struct WaitlistConfig {
    /// Origin serving the API (e.g., "https://example.com").
    /// Endpoints are resolved under `<base_url>/api/`.
    pub base_url: String,
}

/// Anything that can submit a signup. The form talks to this rather than
/// to [`WaitlistClient`] directly.
#[async_trait]
pub trait WaitlistSubmitter: Send + Sync {
    async fn join(&self, entry: &NewWaitlistEntry) -> Result<WaitlistEntry, ClientError>;
}

/// Client for `POST /api/waitlist` and `GET /api/waitlist`.
pub struct WaitlistClient {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl WaitlistClient {
    /// Create a new client.
    ///
    /// Fails if the base URL does not parse or is not http(s).
    pub fn new(config: WaitlistConfig) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(&config.base_url)?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "base_url must be http or https, got {}",
                base_url.scheme()
            )));
        }

        // Without a trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            endpoint: base_url.join("api/waitlist")?,
            http_client: reqwest::Client::new(),
        })
    }

    /// The resolved waitlist endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit a signup. The payload is sent as-is; validation happens server-side.
    pub async fn join(&self, entry: &NewWaitlistEntry) -> Result<WaitlistEntry, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(entry)
            .send()
            .await?;

        read_envelope(response).await
    }

    /// Fetch every entry in signup order.
    pub async fn list_entries(&self) -> Result<Vec<WaitlistEntry>, ClientError> {
        let response = self.http_client.get(self.endpoint.clone()).send().await?;

        read_envelope(response).await
    }
}

#[async_trait]
impl WaitlistSubmitter for WaitlistClient {
    async fn join(&self, entry: &NewWaitlistEntry) -> Result<WaitlistEntry, ClientError> {
        WaitlistClient::join(self, entry).await
    }
}

/// Unwrap `data` from a success envelope, or turn anything else into
/// `ClientError::Api` carrying whatever message the body had.
async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let body = serde_json::from_slice::<ApiResponse<T>>(&bytes).ok();

    match body {
        Some(ApiResponse {
            success: true,
            data: Some(data),
            ..
        }) if status.is_success() => Ok(data),
        Some(body) => Err(ClientError::Api {
            status: status.as_u16(),
            message: body.message,
            errors: body.errors,
        }),
        None => {
            tracing::debug!(status = %status, "Waitlist API returned an unreadable body");
            Err(ClientError::Api {
                status: status.as_u16(),
                message: None,
                errors: None,
            })
        }
    }
}
