//! Subscription plans and their quota limits.
//!
//! The plan table is read-only configuration: it is built once and injected
//! into the services that need it, never mutated at runtime. Tests can supply
//! an alternate table without touching shared state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Subscription tier, externally assigned to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Plan {
    Free,
    Pro,
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Plan::Free => write!(f, "FREE"),
            Plan::Pro => write!(f, "PRO"),
        }
    }
}

/// How many documents a plan admits per workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentAllowance {
    Limited(u32),
    Unlimited,
}

impl DocumentAllowance {
    /// Whether a workspace holding `count` documents may add another.
    pub fn admits(&self, count: u32) -> bool {
        match self {
            DocumentAllowance::Limited(max) => count < *max,
            DocumentAllowance::Unlimited => true,
        }
    }
}

/// Quota limits for a subscription plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    pub plan: Plan,
    pub title: String,
    pub monthly_price_cents: u32,
    pub max_documents: DocumentAllowance,
    pub max_pages_per_document: u32,
    pub max_file_size_bytes: u64,
    pub max_collaborators_per_document: u32,
    pub max_questions_per_document: u32,
    pub max_research_per_document: u32,
}

/// Immutable mapping from plan to its limits.
#[derive(Debug, Clone)]
pub struct PlanTable {
    limits: HashMap<Plan, PlanLimits>,
}

impl PlanTable {
    /// Build a table from explicit entries.
    pub fn new(entries: impl IntoIterator<Item = PlanLimits>) -> Self {
        PlanTable {
            limits: entries.into_iter().map(|l| (l.plan, l)).collect(),
        }
    }

    /// The built-in plan table.
    pub fn builtin() -> Self {
        PlanTable::new([
            PlanLimits {
                plan: Plan::Free,
                title: "Free".to_string(),
                monthly_price_cents: 0,
                max_documents: DocumentAllowance::Limited(1),
                max_pages_per_document: 12,
                max_file_size_bytes: 7 * 1024 * 1024,
                max_collaborators_per_document: 0,
                max_questions_per_document: 5,
                max_research_per_document: 5,
            },
            PlanLimits {
                plan: Plan::Pro,
                title: "Pro".to_string(),
                monthly_price_cents: 999,
                max_documents: DocumentAllowance::Unlimited,
                max_pages_per_document: 50,
                max_file_size_bytes: 10 * 1024 * 1024,
                max_collaborators_per_document: 5,
                max_questions_per_document: 30,
                max_research_per_document: 30,
            },
        ])
    }

    /// Look up the limits for a plan.
    ///
    /// A plan missing from the table is a wiring defect, not a user-facing
    /// failure, and surfaces as [`AppError::UnknownPlan`].
    pub fn limits_for(&self, plan: Plan) -> Result<&PlanLimits, AppError> {
        self.limits
            .get(&plan)
            .ok_or_else(|| AppError::UnknownPlan(plan.to_string()))
    }
}

impl Default for PlanTable {
    fn default() -> Self {
        PlanTable::builtin()
    }
}
