//! Test helpers: scripted probe, recording sinks, and a wired ingestion
//! service.
//!
//! Run from workspace root: `cargo test -p paperdock-ingest`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use reqwest::Url;
use uuid::Uuid;

use paperdock_core::models::{FileCandidate, PlanTable};
use paperdock_core::IngestConfig;
use paperdock_ingest::{
    BinaryUploadSink, ContentProbe, IngestionService, LinkRegistrationSink, ProbeError,
    ProbeHeaders, RegistrationReceipt, SinkError, UploadReceipt,
};

/// What the scripted probe replies with.
#[derive(Clone)]
pub enum ProbeScript {
    Headers(ProbeHeaders),
    NetworkError,
    Status(u16),
}

impl ProbeScript {
    /// A PDF response without a content-disposition header.
    pub fn pdf() -> Self {
        ProbeScript::Headers(ProbeHeaders {
            content_type: Some("application/pdf".to_string()),
            content_disposition: None,
        })
    }

    pub fn content_type(content_type: &str) -> Self {
        ProbeScript::Headers(ProbeHeaders {
            content_type: Some(content_type.to_string()),
            content_disposition: None,
        })
    }

    pub fn pdf_with_disposition(disposition: &str) -> Self {
        ProbeScript::Headers(ProbeHeaders {
            content_type: Some("application/pdf".to_string()),
            content_disposition: Some(disposition.to_string()),
        })
    }
}

/// Probe that replays a script and counts calls.
pub struct ScriptedProbe {
    script: ProbeScript,
    pub calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn new(script: ProbeScript) -> Self {
        ScriptedProbe {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentProbe for ScriptedProbe {
    async fn fetch_headers(&self, _url: &Url) -> Result<ProbeHeaders, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            ProbeScript::Headers(headers) => Ok(headers.clone()),
            ProbeScript::NetworkError => Err(ProbeError::Request("connection refused".to_string())),
            ProbeScript::Status(code) => Err(ProbeError::Status(*code)),
        }
    }
}

/// Upload sink that records calls and optionally fails.
pub struct RecordingUploadSink {
    pub calls: AtomicUsize,
    fail: bool,
}

impl RecordingUploadSink {
    pub fn new(fail: bool) -> Self {
        RecordingUploadSink {
            calls: AtomicUsize::new(0),
            fail,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BinaryUploadSink for RecordingUploadSink {
    async fn upload(&self, files: &[FileCandidate]) -> Result<UploadReceipt, SinkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(files.len(), 1, "at most one file per upload call");
        if self.fail {
            return Err(SinkError::Unavailable("upload service down".to_string()));
        }
        Ok(UploadReceipt {
            file_id: Uuid::new_v4(),
            stored_at: Utc::now(),
        })
    }
}

/// Link sink that records the last registration and optionally fails.
pub struct RecordingLinkSink {
    pub calls: AtomicUsize,
    pub last_registration: Mutex<Option<(String, String)>>,
    fail: bool,
}

impl RecordingLinkSink {
    pub fn new(fail: bool) -> Self {
        RecordingLinkSink {
            calls: AtomicUsize::new(0),
            last_registration: Mutex::new(None),
            fail,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<(String, String)> {
        self.last_registration
            .lock()
            .expect("link sink mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl LinkRegistrationSink for RecordingLinkSink {
    async fn register_by_link(
        &self,
        title: &str,
        url: &str,
    ) -> Result<RegistrationReceipt, SinkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_registration
            .lock()
            .expect("link sink mutex poisoned") = Some((title.to_string(), url.to_string()));
        if self.fail {
            return Err(SinkError::Unavailable("registration service down".to_string()));
        }
        Ok(RegistrationReceipt {
            document_id: Uuid::new_v4(),
            registered_at: Utc::now(),
        })
    }
}

/// A wired service plus handles to its collaborators.
pub struct TestHarness {
    pub service: IngestionService,
    pub probe: Arc<ScriptedProbe>,
    pub uploads: Arc<RecordingUploadSink>,
    pub links: Arc<RecordingLinkSink>,
}

pub fn harness(script: ProbeScript) -> TestHarness {
    harness_with(PlanTable::builtin(), script, false, false)
}

pub fn harness_with(
    plans: PlanTable,
    script: ProbeScript,
    fail_upload: bool,
    fail_link: bool,
) -> TestHarness {
    let probe = Arc::new(ScriptedProbe::new(script));
    let uploads = Arc::new(RecordingUploadSink::new(fail_upload));
    let links = Arc::new(RecordingLinkSink::new(fail_link));
    let service = IngestionService::new(
        plans,
        IngestConfig::default(),
        probe.clone(),
        uploads.clone(),
        links.clone(),
    );
    TestHarness {
        service,
        probe,
        uploads,
        links,
    }
}

/// Small PDF file candidate.
pub fn pdf_file(name: &str) -> FileCandidate {
    FileCandidate {
        file_name: name.to_string(),
        content_type: "application/pdf".to_string(),
        data: Bytes::from_static(b"%PDF-1.7 test"),
    }
}

/// File candidate above the fixed intake ceiling.
pub fn oversized_file(name: &str) -> FileCandidate {
    FileCandidate {
        file_name: name.to_string(),
        content_type: "application/pdf".to_string(),
        data: Bytes::from(vec![0u8; 9 * 1024 * 1024]),
    }
}
