//! Ingestion coordination
//!
//! One attempt runs the sequence quota gate -> source selection -> (link
//! validation) -> sink dispatch, short-circuiting to a terminal rejection at
//! the first failed step. Exactly one sink call is made on the happy path and
//! none on any rejection: the coordinator never partially commits. Nothing is
//! retained between calls; a new attempt requires a fresh request.

use std::sync::Arc;

use paperdock_core::models::{
    DocumentSource, FileCandidate, IngestionOutcome, IngestionRequest, Plan, PlanLimits,
    PlanTable, RejectReason, SourceKind,
};
use paperdock_core::quota::{check_quota, quota_status, QuotaDecision, QuotaStatus};
use paperdock_core::{AppError, IngestConfig};

use crate::link::{LinkError, LinkValidator};
use crate::probe::ContentProbe;
use crate::sinks::{BinaryUploadSink, LinkRegistrationSink};

/// Coordinates a single ingestion attempt from request to terminal outcome.
pub struct IngestionService {
    plans: PlanTable,
    config: IngestConfig,
    validator: LinkValidator,
    upload_sink: Arc<dyn BinaryUploadSink>,
    link_sink: Arc<dyn LinkRegistrationSink>,
}

impl IngestionService {
    pub fn new(
        plans: PlanTable,
        config: IngestConfig,
        probe: Arc<dyn ContentProbe>,
        upload_sink: Arc<dyn BinaryUploadSink>,
        link_sink: Arc<dyn LinkRegistrationSink>,
    ) -> Self {
        let validator = LinkValidator::new(probe, config.link_content_types.clone());
        IngestionService {
            plans,
            config,
            validator,
            upload_sink,
            link_sink,
        }
    }

    /// Limits for a plan, exposed for display and pre-checks.
    pub fn limits_for(&self, plan: Plan) -> Result<&PlanLimits, AppError> {
        self.plans.limits_for(plan)
    }

    /// Quota snapshot for a plan, for showing remaining capacity before an
    /// attempt is made.
    pub fn quota_status(&self, plan: Plan, current_document_count: u32) -> Result<QuotaStatus, AppError> {
        Ok(quota_status(
            current_document_count,
            self.plans.limits_for(plan)?,
        ))
    }

    /// Run one ingestion attempt.
    ///
    /// Domain rejections come back as `Ok(Rejected { .. })`; the error channel
    /// carries only wiring defects such as a plan missing from the table.
    #[tracing::instrument(
        skip(self, request),
        fields(
            attempt_id = %request.attempt_id,
            plan = %request.plan,
            document_count = request.current_document_count,
        )
    )]
    pub async fn ingest(&self, request: IngestionRequest) -> Result<IngestionOutcome, AppError> {
        let limits = self.plans.limits_for(request.plan)?;

        // Quota gates first: a workspace at its limit must not trigger an
        // upload or a remote fetch.
        if let QuotaDecision::Exceeded { used, limit } =
            check_quota(request.current_document_count, limits)
        {
            tracing::info!(used, limit, "Attempt blocked by document quota");
            return Ok(IngestionOutcome::rejected(RejectReason::QuotaExceeded));
        }

        let source = match DocumentSource::select(request.file, request.url) {
            Ok(source) => source,
            Err(conflict) => {
                tracing::debug!(error = %conflict, "Rejected ambiguous source selection");
                return Ok(IngestionOutcome::rejected(RejectReason::InvalidCombination));
            }
        };

        match source {
            DocumentSource::File(file) => Ok(self.ingest_file(file, limits).await),
            DocumentSource::Link(candidate) => Ok(self.ingest_link(&candidate).await),
        }
    }

    async fn ingest_file(&self, file: FileCandidate, limits: &PlanLimits) -> IngestionOutcome {
        let file_size = file.data.len() as u64;
        let size_ceiling = self
            .config
            .intake_max_file_size_bytes
            .min(limits.max_file_size_bytes);
        if file_size > size_ceiling {
            tracing::warn!(
                file_name = %file.file_name,
                file_size,
                size_ceiling,
                "Rejected file above size ceiling"
            );
            return IngestionOutcome::rejected(RejectReason::UploadFailed);
        }

        let title = file.file_name.clone();
        match self.upload_sink.upload(std::slice::from_ref(&file)).await {
            Ok(receipt) => {
                tracing::info!(
                    file_id = %receipt.file_id,
                    title = %title,
                    file_size,
                    "File accepted by upload sink"
                );
                IngestionOutcome::Success {
                    title,
                    source_kind: SourceKind::UploadedFile,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, title = %title, "Binary upload sink failed");
                IngestionOutcome::rejected(RejectReason::UploadFailed)
            }
        }
    }

    async fn ingest_link(&self, candidate: &str) -> IngestionOutcome {
        let link = match self.validator.validate(candidate).await {
            Ok(link) => link,
            Err(LinkError::InvalidSyntax) => {
                return IngestionOutcome::rejected(RejectReason::InvalidUrlSyntax);
            }
            Err(LinkError::UnreachableOrWrongType) => {
                return IngestionOutcome::rejected(RejectReason::UrlUnreachableOrWrongType);
            }
        };

        match self
            .link_sink
            .register_by_link(&link.resolved_file_name, link.url.as_str())
            .await
        {
            Ok(receipt) => {
                tracing::info!(
                    document_id = %receipt.document_id,
                    title = %link.resolved_file_name,
                    url = %link.url,
                    "Link accepted by registration sink"
                );
                IngestionOutcome::Success {
                    title: link.resolved_file_name,
                    source_kind: SourceKind::RemoteLink,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, url = %link.url, "Link registration sink failed");
                IngestionOutcome::rejected(RejectReason::RegistrationFailed)
            }
        }
    }
}
