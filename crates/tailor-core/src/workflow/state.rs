//! Workflow state machine values
//!
//! The orchestrator owns the only writable state; observers receive
//! read-only snapshots through a watch channel.

use crate::error::TailorError;
use crate::types::{ExportArtifact, ResumeHandle, TailoringResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Current stage of the pipeline. `Idle` covers both "never ran" and
/// "finished" (a finished run leaves its outcome in the snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    Idle,
    Submitting,
    Tailoring,
    Exporting,
}

impl WorkflowPhase {
    /// True from the start of submission through the end of export,
    /// success or failure. While busy, a new run must not start.
    pub fn is_busy(&self) -> bool {
        !matches!(self, WorkflowPhase::Idle)
    }
}

/// Read-only view of the workflow session handed to observers.
///
/// Results survive the run that produced them until a new run clears
/// them: a `TailoringResult` obtained before a failed export stays
/// visible alongside the error.
#[derive(Debug, Clone)]
pub struct WorkflowSnapshot {
    pub run_id: Option<Uuid>,
    pub phase: WorkflowPhase,
    pub resume: Option<ResumeHandle>,
    pub result: Option<TailoringResult>,
    pub artifact: Option<ExportArtifact>,
    pub error: Option<TailorError>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl WorkflowSnapshot {
    pub fn busy(&self) -> bool {
        self.phase.is_busy()
    }
}

impl Default for WorkflowSnapshot {
    fn default() -> Self {
        Self {
            run_id: None,
            phase: WorkflowPhase::Idle,
            resume: None,
            result: None,
            artifact: None,
            error: None,
            started_at: None,
            finished_at: None,
        }
    }
}
