//! Shared constants for the ingestion pipeline.

/// Hard ceiling for a single file accepted by the dropzone-style intake,
/// applied regardless of plan. The plan's own `max_file_size_bytes` is
/// enforced on top of this.
pub const INTAKE_MAX_FILE_SIZE_BYTES: u64 = 8 * 1024 * 1024;

/// Content type accepted for link ingestion.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Display title used when neither a content-disposition header nor the URL
/// path yields a usable file name.
pub const FALLBACK_TITLE: &str = "Untitled";

/// Default timeout for the remote content probe.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;
