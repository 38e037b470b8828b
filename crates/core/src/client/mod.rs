//! HTTP client for the catalog service.
//!
//! Speaks the `/api/videos` surface. No retry, timeout or backoff policy:
//! a failed call surfaces an error to the caller and stops.

mod browser;

pub use browser::{CatalogBrowser, DEBOUNCE_INTERVAL};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{NewVideo, VideoRecord};
use crate::metrics::CLIENT_REQUESTS;

/// Errors for catalog client calls.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Video not found: {0}")]
    NotFound(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Error body returned by the service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the catalog service HTTP surface.
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    /// Create a client against a base URL such as `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the whole catalog, newest first.
    pub async fn fetch_all(&self) -> Result<Vec<VideoRecord>, ClientError> {
        let url = format!("{}/videos", self.base_url);
        let response = self.track("fetch_all", self.http.get(&url).send().await)?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    /// Fetch a single video by id.
    pub async fn get(&self, id: &str) -> Result<VideoRecord, ClientError> {
        let url = format!("{}/videos/{}", self.base_url, urlencoding::encode(id));
        let response = self.track("get", self.http.get(&url).send().await)?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    /// Fetch videos with an exactly matching category, newest first.
    pub async fn by_category(&self, category: &str) -> Result<Vec<VideoRecord>, ClientError> {
        let url = format!(
            "{}/videos/category/{}",
            self.base_url,
            urlencoding::encode(category)
        );
        let response = self.track("by_category", self.http.get(&url).send().await)?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    /// Create a video. The service assigns id and creation time and returns
    /// the full stored record.
    pub async fn create(&self, new: &NewVideo) -> Result<VideoRecord, ClientError> {
        let url = format!("{}/videos", self.base_url);
        let response = self.track("create", self.http.post(&url).json(new).send().await)?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    /// Delete a video by id.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let url = format!("{}/videos/{}", self.base_url, urlencoding::encode(id));
        let response = self.track("delete", self.http.delete(&url).send().await)?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    fn track(
        &self,
        op: &str,
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<reqwest::Response, ClientError> {
        match result {
            Ok(response) => {
                let label = if response.status().is_success() {
                    "ok"
                } else {
                    "error"
                };
                CLIENT_REQUESTS.with_label_values(&[op, label]).inc();
                Ok(response)
            }
            Err(e) => {
                CLIENT_REQUESTS.with_label_values(&[op, "transport"]).inc();
                Err(ClientError::Transport(e))
            }
        }
    }

    /// Map a non-success response to the error taxonomy.
    async fn expect_ok(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        if status == reqwest::StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(message))
        } else {
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}
