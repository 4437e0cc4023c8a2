//! Common types shared by the adapters, the orchestrator and the view
//!
//! Field names mirror the backend wire contract exactly; the serde
//! derives are the only codec layer this client owns.

use serde::{Deserialize, Serialize};

/// Resume document selected locally, the input to the upload stage.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl ResumeDocument {
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
        }
    }
}

/// Opaque server-side handle returned by the upload stage.
///
/// `id` must be echoed verbatim in later calls; `display_name` is the
/// original filename and informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeHandle {
    #[serde(rename = "resume_id")]
    pub id: String,
    #[serde(rename = "filename")]
    pub display_name: String,
}

/// User-provided inputs for the tailoring stage, untrimmed as captured.
///
/// Empty or whitespace-only values are omitted from the outgoing
/// request rather than rejected locally; the backend's own defaulting
/// governs their absence.
#[derive(Debug, Clone, Default)]
pub struct TailoringInputs {
    pub job_description_url: Option<String>,
    pub job_description_text: Option<String>,
    pub company_url: Option<String>,
}

/// One detected ATS compatibility problem and its suggested remedy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsIssue {
    pub severity: String,
    pub issue: String,
    pub fix: String,
}

/// ATS compliance report; received issue order is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtsReport {
    #[serde(default)]
    pub issues: Vec<AtsIssue>,
}

/// Keyword-alignment score produced by the tailoring stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitScore {
    pub score: f64,
    #[serde(default)]
    pub top_keywords: Vec<String>,
    #[serde(default)]
    pub present: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl FitScore {
    /// Checks the invariants the backend promises: score within
    /// [0, 100] and no keyword reported both present and missing.
    /// `present` and `missing` need not cover `top_keywords`.
    pub fn is_consistent(&self) -> bool {
        if !(0.0..=100.0).contains(&self.score) {
            return false;
        }
        self.present.iter().all(|k| !self.missing.contains(k))
    }
}

/// Aggregate result of the tailoring stage.
///
/// An absent `fit_score` is legitimately optional, not malformed; it
/// depends on the backend version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringResult {
    pub tailored_text: String,
    #[serde(default)]
    pub change_log: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub ats_before: AtsReport,
    #[serde(default)]
    pub ats_after: AtsReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<FitScore>,
}

/// Location of a generated export artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub saved_to: String,
    pub download_url: String,
}
