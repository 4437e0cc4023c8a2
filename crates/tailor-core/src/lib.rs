//! Resume Tailor client library
//!
//! Client-side orchestration for the three-stage resume tailoring
//! workflow: upload a resume, request a tailoring/scoring pass against
//! a job description, export the tailored document. The tailoring
//! logic itself lives in a remote service; this crate owns the
//! sequencing, the state machine and the error surface.

pub mod clients;
pub mod config;
pub mod error;
pub mod types;
pub mod view;
pub mod workflow;

// Re-export main types for easy access
pub use config::{BackendConfig, TailorConfig};
pub use error::{Result, TailorError};

// Re-export all client types
pub use clients::{ExportClient, TailorClient, UploadClient};

// Re-export workflow types
pub use types::{
    AtsIssue, AtsReport, ExportArtifact, FitScore, ResumeDocument, ResumeHandle, TailoringInputs,
    TailoringResult,
};
pub use view::RunView;
pub use workflow::{
    BackendStages, WorkflowOrchestrator, WorkflowPhase, WorkflowSnapshot, WorkflowStages,
};
