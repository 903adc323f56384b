//! Remote content probe
//!
//! One outbound request per call, no retries. The probe only reads response
//! headers; the body is dropped without being awaited.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::Url;
use thiserror::Error;

use paperdock_core::AppError;

/// Headers observed on the candidate URL.
#[derive(Debug, Clone, Default)]
pub struct ProbeHeaders {
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

/// Probe failures. Callers do not distinguish these further; both mean the
/// URL cannot be ingested right now.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status: {0}")]
    Status(u16),
}

/// Capability to observe the content type and disposition of a remote URL.
#[async_trait]
pub trait ContentProbe: Send + Sync {
    async fn fetch_headers(&self, url: &Url) -> Result<ProbeHeaders, ProbeError>;
}

/// HTTP implementation of [`ContentProbe`] backed by `reqwest`.
pub struct HttpContentProbe {
    client: reqwest::Client,
}

impl HttpContentProbe {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;
        Ok(HttpContentProbe { client })
    }
}

#[async_trait]
impl ContentProbe for HttpContentProbe {
    async fn fetch_headers(&self, url: &Url) -> Result<ProbeHeaders, ProbeError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ProbeError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status().as_u16()));
        }

        let header_value = |name| {
            response
                .headers()
                .get(name)
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string())
        };

        Ok(ProbeHeaders {
            content_type: header_value(CONTENT_TYPE),
            content_disposition: header_value(CONTENT_DISPOSITION),
        })
    }
}
