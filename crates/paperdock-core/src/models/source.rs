//! Document sources and input-mode selection.
//!
//! An ingestion attempt declares exactly one source: a binary file handed
//! over by the intake surface, or a remote link. [`DocumentSource::select`]
//! enforces that invariant once at the boundary; everything downstream
//! consumes the tagged union and cannot observe an invalid combination.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Binary file handle supplied by the intake surface.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    /// File name as declared by the client.
    pub file_name: String,
    /// Declared content type.
    pub content_type: String,
    /// Raw file bytes.
    pub data: Bytes,
}

/// Which kind of source produced a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    UploadedFile,
    RemoteLink,
}

/// The single active source of an ingestion attempt.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    File(FileCandidate),
    Link(String),
}

/// Zero or two sources were supplied where exactly one is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("supply exactly one of a file or a URL")]
pub struct SourceConflict;

impl DocumentSource {
    /// Resolve the active source from the two optional candidates.
    ///
    /// A URL that is empty or whitespace-only counts as absent, matching the
    /// intake surface where clearing the field leaves an empty string behind.
    pub fn select(
        file: Option<FileCandidate>,
        url: Option<String>,
    ) -> Result<DocumentSource, SourceConflict> {
        let url = url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        match (file, url) {
            (Some(file), None) => Ok(DocumentSource::File(file)),
            (None, Some(url)) => Ok(DocumentSource::Link(url)),
            (Some(_), Some(_)) | (None, None) => Err(SourceConflict),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            DocumentSource::File(_) => SourceKind::UploadedFile,
            DocumentSource::Link(_) => SourceKind::RemoteLink,
        }
    }
}
