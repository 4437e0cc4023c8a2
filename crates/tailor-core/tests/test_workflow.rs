//! Orchestrator behavior tests against a mocked stage set

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tailor_core::error::{Result, TailorError};
use tailor_core::types::{
    AtsIssue, AtsReport, ExportArtifact, FitScore, ResumeDocument, ResumeHandle, TailoringInputs,
    TailoringResult,
};
use tailor_core::workflow::{
    WorkflowOrchestrator, WorkflowPhase, WorkflowStages, EXPORT_FILENAME, EXPORT_TITLE,
};
use tokio::sync::Notify;

/// Mock stage set recording call order, with a configurable failing
/// stage and an optional gate that holds the submit stage in flight.
struct MockStages {
    calls: Mutex<Vec<String>>,
    fail_at: Mutex<Option<&'static str>>,
    export_args: Mutex<Option<(String, String, String)>>,
    submit_gate: Option<Arc<Notify>>,
}

impl MockStages {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: Mutex::new(None),
            export_args: Mutex::new(None),
            submit_gate: None,
        }
    }

    fn failing_at(step: &'static str) -> Self {
        let stages = Self::new();
        *stages.fail_at.lock().unwrap() = Some(step);
        stages
    }

    fn gated(gate: Arc<Notify>) -> Self {
        let mut stages = Self::new();
        stages.submit_gate = Some(gate);
        stages
    }

    fn set_failure(&self, step: &'static str) {
        *self.fail_at.lock().unwrap() = Some(step);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, step: &str) -> Result<()> {
        self.calls.lock().unwrap().push(step.to_string());
        if *self.fail_at.lock().unwrap() == Some(step) {
            return Err(match step {
                "submit" => TailorError::UploadFailed("HTTP 500".to_string()),
                "tailor" => TailorError::TailorFailed("HTTP 500".to_string()),
                _ => TailorError::ExportFailed("HTTP 500".to_string()),
            });
        }
        Ok(())
    }
}

fn sample_result() -> TailoringResult {
    TailoringResult {
        tailored_text: "JANE DOE\nGo, Kubernetes".to_string(),
        change_log: vec!["Added Kubernetes to skills".to_string()],
        suggestions: vec!["Quantify achievements".to_string()],
        ats_before: AtsReport {
            issues: vec![AtsIssue {
                severity: "high".to_string(),
                issue: "Two-column layout".to_string(),
                fix: "Use a single column".to_string(),
            }],
        },
        ats_after: AtsReport::default(),
        fit_score: Some(FitScore {
            score: 72.0,
            top_keywords: vec!["Go".to_string(), "Kubernetes".to_string(), "gRPC".to_string()],
            present: vec!["Go".to_string(), "Kubernetes".to_string()],
            missing: vec!["gRPC".to_string()],
            coverage_ratio: Some(0.66),
            heading_bonus: None,
            note: None,
        }),
    }
}

#[async_trait]
impl WorkflowStages for MockStages {
    async fn submit(&self, document: &ResumeDocument) -> Result<ResumeHandle> {
        if let Some(gate) = &self.submit_gate {
            gate.notified().await;
        }
        self.record("submit")?;
        Ok(ResumeHandle {
            id: "r-1".to_string(),
            display_name: document.filename.clone(),
        })
    }

    async fn tailor(
        &self,
        handle: &ResumeHandle,
        _inputs: &TailoringInputs,
    ) -> Result<TailoringResult> {
        assert_eq!(handle.id, "r-1", "tailor must receive the upload's handle");
        self.record("tailor")?;
        Ok(sample_result())
    }

    async fn export(&self, content: &str, filename: &str, title: &str) -> Result<ExportArtifact> {
        self.record("export")?;
        *self.export_args.lock().unwrap() = Some((
            content.to_string(),
            filename.to_string(),
            title.to_string(),
        ));
        Ok(ExportArtifact {
            saved_to: "/files/abc.docx".to_string(),
            download_url: "https://svc/files/abc.docx".to_string(),
        })
    }
}

fn document() -> Option<ResumeDocument> {
    Some(ResumeDocument::new(b"PK\x03\x04...".to_vec(), "resume.docx"))
}

fn jd_inputs() -> TailoringInputs {
    TailoringInputs {
        job_description_text: Some("Senior backend engineer, Go, Kubernetes".to_string()),
        ..TailoringInputs::default()
    }
}

#[tokio::test]
async fn stages_run_in_order_and_results_are_exposed() {
    let orchestrator = WorkflowOrchestrator::new(MockStages::new());

    let artifact = orchestrator.run(document(), jd_inputs()).await.unwrap();
    assert_eq!(
        artifact.unwrap().download_url,
        "https://svc/files/abc.docx"
    );

    // Tailor never ran before submit, export never before tailor.
    assert_eq!(orchestrator.stages().calls(), vec!["submit", "tailor", "export"]);

    let snapshot = orchestrator.snapshot();
    assert_eq!(snapshot.phase, WorkflowPhase::Idle);
    assert!(!snapshot.busy());
    assert_eq!(snapshot.resume.as_ref().unwrap().id, "r-1");
    assert!(snapshot.error.is_none());

    let result = snapshot.result.as_ref().unwrap();
    let fit = result.fit_score.as_ref().unwrap();
    assert_eq!(fit.score, 72.0);
    assert!(fit.is_consistent());
    assert_eq!(
        snapshot.artifact.as_ref().unwrap().download_url,
        "https://svc/files/abc.docx"
    );
}

#[tokio::test]
async fn export_receives_tailored_text_and_fixed_names() {
    let orchestrator = WorkflowOrchestrator::new(MockStages::new());
    orchestrator.run(document(), jd_inputs()).await.unwrap();

    let (content, filename, title) = orchestrator
        .stages()
        .export_args
        .lock()
        .unwrap()
        .clone()
        .unwrap();
    assert_eq!(content, sample_result().tailored_text);
    assert_eq!(filename, EXPORT_FILENAME);
    assert_eq!(title, EXPORT_TITLE);
}

#[tokio::test]
async fn upload_failure_short_circuits_remaining_stages() {
    let orchestrator = WorkflowOrchestrator::new(MockStages::failing_at("submit"));

    let err = orchestrator.run(document(), jd_inputs()).await.unwrap_err();
    assert!(matches!(err, TailorError::UploadFailed(_)));

    // Neither tailor nor export ever ran.
    assert_eq!(orchestrator.stages().calls(), vec!["submit"]);

    let snapshot = orchestrator.snapshot();
    assert!(!snapshot.busy());
    assert!(snapshot.result.is_none());
    assert!(snapshot.artifact.is_none());
    assert!(matches!(
        snapshot.error,
        Some(TailorError::UploadFailed(_))
    ));
}

#[tokio::test]
async fn export_failure_retains_tailoring_result() {
    let orchestrator = WorkflowOrchestrator::new(MockStages::failing_at("export"));

    let err = orchestrator.run(document(), jd_inputs()).await.unwrap_err();
    assert!(matches!(err, TailorError::ExportFailed(_)));

    let snapshot = orchestrator.snapshot();
    assert!(!snapshot.busy());
    assert!(snapshot.artifact.is_none());

    // The completed tailoring result stays visible for inspection.
    let result = snapshot.result.as_ref().unwrap();
    assert_eq!(result.change_log, vec!["Added Kubernetes to skills"]);
    assert!(result.ats_after.issues.is_empty());
    assert_eq!(result.fit_score.as_ref().unwrap().score, 72.0);
}

#[tokio::test]
async fn missing_document_fails_before_any_stage() {
    let orchestrator = WorkflowOrchestrator::new(MockStages::new());

    let err = orchestrator.run(None, jd_inputs()).await.unwrap_err();
    assert!(matches!(err, TailorError::MissingInput(_)));
    assert!(orchestrator.stages().calls().is_empty());
}

#[tokio::test]
async fn second_run_while_busy_is_a_noop() {
    let gate = Arc::new(Notify::new());
    let orchestrator = Arc::new(WorkflowOrchestrator::new(MockStages::gated(gate.clone())));

    let background = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move { orchestrator.run(document(), jd_inputs()).await })
    };

    // Wait until the first run has entered the pipeline.
    let mut rx = orchestrator.subscribe();
    rx.wait_for(|s| s.phase == WorkflowPhase::Submitting)
        .await
        .unwrap();

    // The second invocation produces no network calls and leaves the
    // in-flight run untouched.
    let second = orchestrator.run(document(), jd_inputs()).await.unwrap();
    assert!(second.is_none());
    assert!(orchestrator.snapshot().busy());
    assert!(orchestrator.stages().calls().is_empty());

    gate.notify_one();
    let first = background.await.unwrap().unwrap();
    assert!(first.is_some());
    assert_eq!(orchestrator.stages().calls(), vec!["submit", "tailor", "export"]);
}

#[tokio::test]
async fn new_run_clears_stale_results() {
    let orchestrator = WorkflowOrchestrator::new(MockStages::new());

    orchestrator.run(document(), jd_inputs()).await.unwrap();
    assert!(orchestrator.snapshot().result.is_some());

    // A failing second run must not show the first run's results.
    orchestrator.stages().set_failure("submit");
    let err = orchestrator.run(document(), jd_inputs()).await.unwrap_err();
    assert!(matches!(err, TailorError::UploadFailed(_)));

    let snapshot = orchestrator.snapshot();
    assert!(snapshot.result.is_none());
    assert!(snapshot.artifact.is_none());
}
