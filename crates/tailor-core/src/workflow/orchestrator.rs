//! Workflow orchestrator: sequences the three stages, owns the state

use super::state::{WorkflowPhase, WorkflowSnapshot};
use super::traits::WorkflowStages;
use crate::error::{Result, TailorError};
use crate::types::{ExportArtifact, ResumeDocument, TailoringInputs};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use uuid::Uuid;

/// Fixed artifact name passed to the export stage.
pub const EXPORT_FILENAME: &str = "tailored_resume.docx";
/// Fixed document title passed to the export stage.
pub const EXPORT_TITLE: &str = "TAILORED RESUME";

/// Single orchestration component for the upload → tailor → export
/// pipeline. At most one run is in flight at a time; a second `run`
/// call while busy is a no-op.
pub struct WorkflowOrchestrator<T: WorkflowStages> {
    stages: T,
    running: AtomicBool,
    state_tx: watch::Sender<WorkflowSnapshot>,
}

impl<T: WorkflowStages> WorkflowOrchestrator<T> {
    pub fn new(stages: T) -> Self {
        let (state_tx, _) = watch::channel(WorkflowSnapshot::default());
        Self {
            stages,
            running: AtomicBool::new(false),
            state_tx,
        }
    }

    /// Subscribe to state changes; the receiver observes every phase
    /// transition as a read-only snapshot.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.state_tx.subscribe()
    }

    /// Current state as a read-only snapshot.
    pub fn snapshot(&self) -> WorkflowSnapshot {
        self.state_tx.borrow().clone()
    }

    /// Access to the underlying stage set.
    pub fn stages(&self) -> &T {
        &self.stages
    }

    /// Run the full pipeline once.
    ///
    /// Returns `Ok(None)` without touching any state when a run is
    /// already in flight. Otherwise the three stages execute strictly
    /// in sequence, each awaited to completion; the first failure
    /// aborts the remaining stages and is returned after being
    /// recorded in the snapshot. Results obtained before the failing
    /// stage stay visible. There is no retry and no cancellation.
    pub async fn run(
        &self,
        document: Option<ResumeDocument>,
        inputs: TailoringInputs,
    ) -> Result<Option<ExportArtifact>> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("Workflow already in flight, ignoring run request");
            return Ok(None);
        }

        let run_id = Uuid::new_v4();
        log::info!("Workflow run {} started", run_id);

        // Stale results from a previous run must not be shown
        // alongside a new in-flight run.
        self.state_tx.send_modify(|s| {
            s.run_id = Some(run_id);
            s.phase = WorkflowPhase::Submitting;
            s.result = None;
            s.artifact = None;
            s.error = None;
            s.started_at = Some(Utc::now());
            s.finished_at = None;
        });

        let outcome = self.run_stages(run_id, document, inputs).await;

        self.state_tx.send_modify(|s| {
            s.phase = WorkflowPhase::Idle;
            s.finished_at = Some(Utc::now());
            if let Err(e) = &outcome {
                s.error = Some(e.clone());
            }
        });
        self.running.store(false, Ordering::Release);

        match outcome {
            Ok(artifact) => {
                log::info!("Workflow run {} completed", run_id);
                Ok(Some(artifact))
            }
            Err(e) => {
                log::error!("Workflow run {} failed at {} stage: {}", run_id, e.stage(), e);
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        run_id: Uuid,
        document: Option<ResumeDocument>,
        inputs: TailoringInputs,
    ) -> Result<ExportArtifact> {
        let document = document.ok_or_else(|| {
            TailorError::MissingInput("select a resume document first".to_string())
        })?;

        // Stage 1: upload
        let handle = self.stages.submit(&document).await?;
        log::info!("Run {}: uploaded as resume_id '{}'", run_id, handle.id);

        self.state_tx.send_modify(|s| {
            s.resume = Some(handle.clone());
            s.phase = WorkflowPhase::Tailoring;
        });

        // Stage 2: tailor. The result is stored as soon as it exists
        // so it stays visible even if the export stage fails.
        let result = self.stages.tailor(&handle, &inputs).await?;
        log::info!(
            "Run {}: tailoring returned {} changes",
            run_id,
            result.change_log.len()
        );

        self.state_tx.send_modify(|s| {
            s.result = Some(result.clone());
            s.phase = WorkflowPhase::Exporting;
        });

        // Stage 3: export
        let artifact = self
            .stages
            .export(&result.tailored_text, EXPORT_FILENAME, EXPORT_TITLE)
            .await?;
        log::info!("Run {}: exported to {}", run_id, artifact.download_url);

        self.state_tx.send_modify(|s| {
            s.artifact = Some(artifact.clone());
        });

        Ok(artifact)
    }
}
