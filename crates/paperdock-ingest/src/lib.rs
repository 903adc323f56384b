//! Paperdock ingestion pipeline
//!
//! This crate turns one user action into one terminal outcome: it gates the
//! attempt on the plan's document quota, resolves the single active source
//! (uploaded file or remote link), validates link candidates against the
//! remote content, and dispatches exactly one call to the appropriate
//! external sink. The sinks themselves (binary upload, link registration)
//! and the content probe are trait seams; `reqwest`-backed defaults live
//! here, everything else is injected.

pub mod link;
pub mod probe;
pub mod service;
pub mod sinks;
pub mod telemetry;

// Re-export commonly used types
pub use link::{LinkError, LinkValidator, ValidatedLink};
pub use probe::{ContentProbe, HttpContentProbe, ProbeError, ProbeHeaders};
pub use service::IngestionService;
pub use sinks::{
    BinaryUploadSink, LinkRegistrationSink, RegistrationReceipt, SinkError, UploadReceipt,
};
