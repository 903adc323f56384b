//! Document quota gate.
//!
//! The gate runs before any validation or external call with a cost, so a
//! workspace already at quota never triggers a wasted upload or remote fetch.
//! An exceeded quota is a normal terminal outcome that the surface presents
//! as a guided upgrade path, not a failure.

use crate::models::{DocumentAllowance, PlanLimits};

/// Decision of the quota gate for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    Admitted,
    Exceeded { used: u32, limit: u32 },
}

/// Admit or block an attempt based on the committed document count.
pub fn check_quota(current_document_count: u32, limits: &PlanLimits) -> QuotaDecision {
    match limits.max_documents {
        DocumentAllowance::Unlimited => QuotaDecision::Admitted,
        DocumentAllowance::Limited(limit) => {
            if current_document_count < limit {
                QuotaDecision::Admitted
            } else {
                QuotaDecision::Exceeded {
                    used: current_document_count,
                    limit,
                }
            }
        }
    }
}

/// Snapshot of quota usage for display before an attempt is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct QuotaStatus {
    pub used: u32,
    /// None for unlimited plans.
    pub limit: Option<u32>,
    /// None for unlimited plans.
    pub remaining: Option<u32>,
}

pub fn quota_status(current_document_count: u32, limits: &PlanLimits) -> QuotaStatus {
    match limits.max_documents {
        DocumentAllowance::Unlimited => QuotaStatus {
            used: current_document_count,
            limit: None,
            remaining: None,
        },
        DocumentAllowance::Limited(limit) => QuotaStatus {
            used: current_document_count,
            limit: Some(limit),
            remaining: Some(limit.saturating_sub(current_document_count)),
        },
    }
}
