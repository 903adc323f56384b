//! Ingestion attempts and their outcomes.
//!
//! An [`IngestionRequest`] is constructed fresh per user action, consumed
//! exactly once, and never retried or persisted. The resulting
//! [`IngestionOutcome`] is terminal: a new attempt requires a new request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::plan::Plan;
use super::source::{FileCandidate, SourceKind};

/// One user-triggered attempt to add a document from exactly one source.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// Correlation id for this attempt, generated at construction.
    pub attempt_id: Uuid,
    /// The account's current subscription plan.
    pub plan: Plan,
    /// Committed document count for the workspace at request time.
    pub current_document_count: u32,
    /// Uploaded file, if the file mode is active.
    pub file: Option<FileCandidate>,
    /// Candidate URL, if the link mode is active.
    pub url: Option<String>,
}

impl IngestionRequest {
    pub fn new(
        plan: Plan,
        current_document_count: u32,
        file: Option<FileCandidate>,
        url: Option<String>,
    ) -> Self {
        IngestionRequest {
            attempt_id: Uuid::new_v4(),
            plan,
            current_document_count,
            file,
            url,
        }
    }
}

/// Terminal result of an ingestion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestionOutcome {
    Success {
        title: String,
        source_kind: SourceKind,
    },
    Rejected {
        reason: RejectReason,
    },
}

impl IngestionOutcome {
    pub fn rejected(reason: RejectReason) -> Self {
        IngestionOutcome::Rejected { reason }
    }
}

/// Why an ingestion attempt was turned away.
///
/// Every variant is a normal terminal outcome surfaced to the user, never a
/// propagated failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The workspace already holds the plan's maximum number of documents.
    QuotaExceeded,
    /// Zero or two sources were supplied.
    InvalidCombination,
    /// The candidate did not parse as an absolute http(s) URL.
    InvalidUrlSyntax,
    /// The URL could not be fetched, or does not serve an accepted type.
    UrlUnreachableOrWrongType,
    /// The binary upload sink refused or failed.
    UploadFailed,
    /// The link registration sink refused or failed.
    RegistrationFailed,
}

impl RejectReason {
    /// Machine-readable code for API consumers.
    pub fn error_code(&self) -> &'static str {
        match self {
            RejectReason::QuotaExceeded => "QUOTA_EXCEEDED",
            RejectReason::InvalidCombination => "INVALID_COMBINATION",
            RejectReason::InvalidUrlSyntax => "INVALID_URL",
            RejectReason::UrlUnreachableOrWrongType => "URL_UNREACHABLE_OR_WRONG_TYPE",
            RejectReason::UploadFailed => "UPLOAD_FAILED",
            RejectReason::RegistrationFailed => "REGISTRATION_FAILED",
        }
    }

    /// User-facing copy for the intake surface.
    pub fn client_message(&self) -> &'static str {
        match self {
            RejectReason::QuotaExceeded => {
                "You've reached the maximum number of documents for your current plan. \
                 Upgrade to Pro to upload more documents."
            }
            RejectReason::InvalidCombination => "Please upload a file or enter a URL.",
            RejectReason::InvalidUrlSyntax => "Invalid URL",
            RejectReason::UrlUnreachableOrWrongType => "URL is not a PDF",
            RejectReason::UploadFailed | RejectReason::RegistrationFailed => {
                "Error occurred while uploading. Please make sure the PDF is accessible."
            }
        }
    }

    /// Whether the surface should offer the plan-upgrade path instead of an
    /// error message.
    pub fn is_upgrade_prompt(&self) -> bool {
        matches!(self, RejectReason::QuotaExceeded)
    }
}
