//! Candidate link validation
//!
//! A link candidate passes three stages: a syntactic parse (no network
//! traffic on failure), a single content probe whose declared type must be
//! accepted, and title resolution, which never fails and degrades to a
//! placeholder instead.

use std::sync::Arc;

use reqwest::Url;
use thiserror::Error;

use paperdock_core::constants::FALLBACK_TITLE;

use crate::probe::{ContentProbe, ProbeHeaders};

/// A candidate URL that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedLink {
    pub url: Url,
    /// Best-effort display title derived from the probe response or the URL
    /// path. Not a validated filename.
    pub resolved_file_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The candidate is not a well-formed absolute http(s) URL. Terminal
    /// before any network call.
    #[error("candidate is not a well-formed absolute URL")]
    InvalidSyntax,

    /// The probe failed, or the URL does not serve an accepted content type.
    /// The two cases are deliberately indistinguishable to callers.
    #[error("URL could not be fetched or does not serve an accepted type")]
    UnreachableOrWrongType,
}

/// Validates link candidates against the remote content.
pub struct LinkValidator {
    probe: Arc<dyn ContentProbe>,
    allowed_content_types: Vec<String>,
}

impl LinkValidator {
    pub fn new(probe: Arc<dyn ContentProbe>, allowed_content_types: Vec<String>) -> Self {
        LinkValidator {
            probe,
            allowed_content_types,
        }
    }

    /// Validate a candidate URL. Issues exactly one probe per call, and none
    /// when the candidate fails the syntactic check.
    pub async fn validate(&self, candidate: &str) -> Result<ValidatedLink, LinkError> {
        let url = parse_candidate(candidate)?;

        let headers = match self.probe.fetch_headers(&url).await {
            Ok(headers) => headers,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Content probe failed");
                return Err(LinkError::UnreachableOrWrongType);
            }
        };

        let declared = headers.content_type.as_deref().unwrap_or_default();
        if !self.is_accepted_content_type(declared) {
            tracing::debug!(
                url = %url,
                content_type = %declared,
                "Rejected link with unaccepted content type"
            );
            return Err(LinkError::UnreachableOrWrongType);
        }

        let resolved_file_name = resolve_file_name(&headers, &url);
        Ok(ValidatedLink {
            url,
            resolved_file_name,
        })
    }

    fn is_accepted_content_type(&self, content_type: &str) -> bool {
        let normalized = normalize_mime_type(content_type).to_lowercase();
        self.allowed_content_types
            .iter()
            .any(|ct| normalized == ct.to_lowercase())
    }
}

/// Syntactic check: absolute URL with an http(s) scheme.
fn parse_candidate(candidate: &str) -> Result<Url, LinkError> {
    let url = Url::parse(candidate).map_err(|_| LinkError::InvalidSyntax)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(LinkError::InvalidSyntax);
    }
    Ok(url)
}

/// Normalize MIME type by stripping parameters (e.g. "application/pdf; charset=binary" -> "application/pdf").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Derive a display title: the content-disposition segment after the first
/// `filename=` token, verbatim; else the last non-empty path segment of the
/// URL; else the fixed placeholder.
fn resolve_file_name(headers: &ProbeHeaders, url: &Url) -> String {
    headers
        .content_disposition
        .as_deref()
        .and_then(|cd| cd.split("filename=").nth(1))
        .filter(|name| !name.is_empty())
        .map(|s| s.to_string())
        .or_else(|| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|name| !name.is_empty())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}
