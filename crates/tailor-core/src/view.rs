//! Display-ready shaping of workflow snapshots
//!
//! Presentation itself lives in the front end; this module only maps
//! raw results into the capped, normalized values the front end shows.

use crate::workflow::WorkflowSnapshot;
use std::fmt::Write;

/// At most this many present/missing keywords are shown.
pub const MAX_KEYWORD_PILLS: usize = 16;
/// At most this many ATS issues are shown.
pub const MAX_ATS_ISSUES: usize = 8;

/// Fit score shaped for display.
#[derive(Debug, Clone)]
pub struct FitScoreView {
    pub score: f64,
    /// Score clamped to 0..=100 for a progress bar width.
    pub bar_percent: u8,
    pub coverage_ratio: Option<f64>,
    pub heading_bonus: Option<f64>,
    pub note: Option<String>,
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

/// One ATS issue as a headline plus remedy.
#[derive(Debug, Clone)]
pub struct AtsIssueView {
    /// "SEVERITY: issue"
    pub headline: String,
    pub fix: String,
}

/// Everything a front end needs to render one workflow run.
#[derive(Debug, Clone)]
pub struct RunView {
    pub busy: bool,
    pub resume_id: Option<String>,
    pub fit_score: Option<FitScoreView>,
    pub ats_after: Vec<AtsIssueView>,
    pub change_log: Vec<String>,
    pub suggestions: Vec<String>,
    pub tailored_preview: Option<String>,
    pub download_url: Option<String>,
    pub error: Option<String>,
}

impl RunView {
    pub fn from_snapshot(snapshot: &WorkflowSnapshot) -> Self {
        let fit_score = snapshot
            .result
            .as_ref()
            .and_then(|r| r.fit_score.as_ref())
            .map(|f| FitScoreView {
                score: f.score,
                bar_percent: f.score.clamp(0.0, 100.0).round() as u8,
                coverage_ratio: f.coverage_ratio,
                heading_bonus: f.heading_bonus,
                note: f.note.clone(),
                present: f.present.iter().take(MAX_KEYWORD_PILLS).cloned().collect(),
                missing: f.missing.iter().take(MAX_KEYWORD_PILLS).cloned().collect(),
            });

        let ats_after = snapshot
            .result
            .as_ref()
            .map(|r| {
                r.ats_after
                    .issues
                    .iter()
                    .take(MAX_ATS_ISSUES)
                    .map(|x| AtsIssueView {
                        headline: format!("{}: {}", x.severity.to_uppercase(), x.issue),
                        fix: x.fix.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            busy: snapshot.busy(),
            resume_id: snapshot.resume.as_ref().map(|h| h.id.clone()),
            fit_score,
            ats_after,
            change_log: snapshot
                .result
                .as_ref()
                .map(|r| r.change_log.clone())
                .unwrap_or_default(),
            suggestions: snapshot
                .result
                .as_ref()
                .map(|r| r.suggestions.clone())
                .unwrap_or_default(),
            tailored_preview: snapshot.result.as_ref().map(|r| r.tailored_text.clone()),
            download_url: snapshot.artifact.as_ref().map(|a| a.download_url.clone()),
            error: snapshot.error.as_ref().map(|e| e.to_string()),
        }
    }

    /// Plain-text rendering used by the CLI.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(id) = &self.resume_id {
            let _ = writeln!(out, "resume_id: {}", id);
        }

        if let Some(score) = &self.fit_score {
            let _ = writeln!(out, "\nJob fit score: {}/100", score.score);
            if let Some(coverage) = score.coverage_ratio {
                let _ = writeln!(out, "  coverage: {}", coverage);
            }
            if let Some(bonus) = score.heading_bonus {
                let _ = writeln!(out, "  heading bonus: {}", bonus);
            }
            if let Some(note) = &score.note {
                let _ = writeln!(out, "  note: {}", note);
            }
            if !score.present.is_empty() {
                let _ = writeln!(out, "  found: {}", score.present.join(", "));
            }
            if !score.missing.is_empty() {
                let _ = writeln!(out, "  missing: {}", score.missing.join(", "));
            }
        }

        if !self.ats_after.is_empty() {
            let _ = writeln!(out, "\nATS warnings after tailoring:");
            for issue in &self.ats_after {
                let _ = writeln!(out, "  {}", issue.headline);
                let _ = writeln!(out, "    fix: {}", issue.fix);
            }
        } else if self.tailored_preview.is_some() {
            let _ = writeln!(out, "\nNo ATS issues detected.");
        }

        if !self.change_log.is_empty() {
            let _ = writeln!(out, "\nChange log:");
            for entry in &self.change_log {
                let _ = writeln!(out, "  - {}", entry);
            }
        }

        if !self.suggestions.is_empty() {
            let _ = writeln!(out, "\nSuggestions:");
            for entry in &self.suggestions {
                let _ = writeln!(out, "  - {}", entry);
            }
        }

        if let Some(url) = &self.download_url {
            let _ = writeln!(out, "\nDownload: {}", url);
        }

        if let Some(error) = &self.error {
            let _ = writeln!(out, "\nError: {}", error);
        }

        out
    }
}
