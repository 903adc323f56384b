//! External sink traits
//!
//! The pipeline delegates durable acceptance of a document to one of two
//! external services: a binary upload sink for file mode and a link
//! registration sink for URL mode. Both are asynchronous request/response
//! operations; neither is cancellable mid-flight, and retry policy (if any)
//! belongs to the caller, not to the pipeline.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use paperdock_core::models::FileCandidate;

/// Sink operation errors
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink looked at the document and refused it.
    #[error("sink rejected the document: {0}")]
    Rejected(String),

    /// The sink could not be reached or failed internally.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// Receipt returned by the binary upload sink.
#[derive(Debug, Clone, Serialize)]
pub struct UploadReceipt {
    pub file_id: Uuid,
    pub stored_at: DateTime<Utc>,
}

/// Receipt returned by the link registration sink.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationReceipt {
    pub document_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

/// External service that durably stores uploaded binaries.
///
/// At most one file is passed per call in this design; the slice mirrors the
/// sink's wire contract.
#[async_trait]
pub trait BinaryUploadSink: Send + Sync {
    async fn upload(&self, files: &[FileCandidate]) -> Result<UploadReceipt, SinkError>;
}

/// External service that registers a document by URL, retaining only the
/// link and a display title.
#[async_trait]
pub trait LinkRegistrationSink: Send + Sync {
    async fn register_by_link(
        &self,
        title: &str,
        url: &str,
    ) -> Result<RegistrationReceipt, SinkError>;
}
