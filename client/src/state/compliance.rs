//! Compliance view state: document selection, run orchestration, and the
//! presentation mapping for scores and issue severities.
//!
//! SYSTEM CONTEXT
//! ==============
//! `result_seq` increments once per delivered result. The chat widget
//! watches it to auto-open with an issue summary exactly once per run.

#[cfg(test)]
#[path = "compliance_test.rs"]
mod compliance_test;

use crate::net::api::DocumentApi;
use crate::net::error::ApiError;
use crate::net::types::{ComplianceHistoryEntry, ComplianceResult};

pub const SELECT_DOCUMENT_PROMPT: &str = "Please select a document first.";

/// Compliance page state.
#[derive(Clone, Debug, Default)]
pub struct ComplianceState {
    /// Selected document id; empty means nothing selected.
    pub selected: String,
    /// Document the current result belongs to.
    pub result_doc: Option<String>,
    pub result: Option<ComplianceResult>,
    pub history: Vec<ComplianceHistoryEntry>,
    pub loading: bool,
    pub error: Option<String>,
    pub result_seq: u64,
}

impl ComplianceState {
    pub fn begin_run(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_run(&mut self, doc_id: &str, outcome: Result<ComplianceRun, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(run) => {
                self.result = Some(run.result);
                self.history = run.history;
                self.result_doc = Some(doc_id.to_owned());
                self.result_seq += 1;
            }
            Err(e) => {
                leptos::logging::warn!("compliance check for {doc_id} failed: {e}");
                self.error = Some(format!("Compliance check failed: {}", e.user_message()));
            }
        }
    }
}

/// Why a run could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ComplianceRunError {
    #[error("Please select a document first.")]
    NoDocument,
}

/// Result and history fetched for one document.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceRun {
    pub result: ComplianceResult,
    pub history: Vec<ComplianceHistoryEntry>,
}

/// Validate the selection; `Err` means no request may be made.
pub fn selected_document(selected: &str) -> Result<&str, ComplianceRunError> {
    let id = selected.trim();
    if id.is_empty() { Err(ComplianceRunError::NoDocument) } else { Ok(id) }
}

/// Fetch the compliance result and history for `doc_id`.
///
/// A failing history call is logged and yields an empty history; it does not
/// discard a successful result.
pub async fn run_check<A: DocumentApi>(api: &A, doc_id: &str) -> Result<ComplianceRun, ApiError> {
    let result = api.check_compliance(doc_id).await?;
    let history = match api.compliance_history(doc_id).await {
        Ok(history) => history,
        Err(e) => {
            leptos::logging::warn!("compliance history for {doc_id} failed: {e}");
            Vec::new()
        }
    };
    Ok(ComplianceRun { result, history })
}

// =============================================================
// Presentation
// =============================================================

/// Severity keyword embedded in an issue string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    /// Detect a severity keyword as a whole word in `issue`, ignoring case.
    /// HIGH wins over MEDIUM, which wins over LOW.
    pub fn from_issue(issue: &str) -> Self {
        let mut found = Self::Unknown;
        for word in issue.split(|c: char| !c.is_ascii_alphanumeric()) {
            let candidate = if word.eq_ignore_ascii_case("HIGH") {
                Self::High
            } else if word.eq_ignore_ascii_case("MEDIUM") {
                Self::Medium
            } else if word.eq_ignore_ascii_case("LOW") {
                Self::Low
            } else {
                continue;
            };
            if candidate.rank() > found.rank() {
                found = candidate;
            }
        }
        found
    }

    fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Unknown => 0,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#e74c3c",
            Self::Medium => "#f39c12",
            Self::Low => "#f1c40f",
            Self::Unknown => "#3498db",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Unknown => "INFO",
        }
    }
}

pub fn status_label(result: &ComplianceResult) -> &'static str {
    if result.compliant { "Passed" } else { "Issues Found" }
}

/// Clamp to the 0-100 scale the gauge draws.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_finite() { score.clamp(0.0, 100.0) } else { 0.0 }
}

/// `"42/100"` style label.
pub fn score_label(score: f64) -> String {
    format!("{:.0}/100", clamp_score(score))
}

/// Gauge band for a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugeBand {
    Good,
    Fair,
    Poor,
}

impl GaugeBand {
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= 80.0 {
            Self::Good
        } else if score >= 50.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Good => "#2ecc71",
            Self::Fair => "#f39c12",
            Self::Poor => "#e74c3c",
        }
    }
}

/// Radius of the gauge circle in SVG user units.
pub const GAUGE_RADIUS: f64 = 52.0;

/// SVG stroke geometry for a circular score gauge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauge {
    pub score: f64,
    pub circumference: f64,
    /// Length of the filled arc.
    pub filled: f64,
    pub band: GaugeBand,
}

impl Gauge {
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        let circumference = 2.0 * std::f64::consts::PI * GAUGE_RADIUS;
        Self { score, circumference, filled: circumference * score / 100.0, band: GaugeBand::from_score(score) }
    }

    /// Value for the `stroke-dasharray` attribute.
    pub fn dasharray(&self) -> String {
        format!("{:.2} {:.2}", self.filled, self.circumference)
    }
}
