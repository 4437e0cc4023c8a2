//! Workflow management module

pub mod orchestrator;
pub mod state;
pub mod traits;

pub use orchestrator::{WorkflowOrchestrator, EXPORT_FILENAME, EXPORT_TITLE};
pub use state::{WorkflowPhase, WorkflowSnapshot};
pub use traits::{BackendStages, WorkflowStages};
