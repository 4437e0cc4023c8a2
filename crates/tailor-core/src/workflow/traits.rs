//! Workflow stage trait for strongly-typed pipeline processing

use crate::clients::{ExportClient, TailorClient, UploadClient};
use crate::config::BackendConfig;
use crate::error::Result;
use crate::types::{ExportArtifact, ResumeDocument, ResumeHandle, TailoringInputs, TailoringResult};
use async_trait::async_trait;

/// The three dependent stages of one workflow run.
///
/// Each stage has explicit, required parameters threaded forward from
/// the previous stage's output. The trait is the seam between the
/// orchestrator and the HTTP adapters and enables mocking in tests.
#[async_trait]
pub trait WorkflowStages: Send + Sync {
    /// Stage 1: upload the document, returns the server-side handle.
    async fn submit(&self, document: &ResumeDocument) -> Result<ResumeHandle>;

    /// Stage 2: request analysis and rewrite for an uploaded resume.
    async fn tailor(
        &self,
        handle: &ResumeHandle,
        inputs: &TailoringInputs,
    ) -> Result<TailoringResult>;

    /// Stage 3: generate a downloadable artifact from the final text.
    async fn export(&self, content: &str, filename: &str, title: &str) -> Result<ExportArtifact>;
}

/// Production implementation backed by the three HTTP clients.
#[derive(Debug)]
pub struct BackendStages {
    upload_client: UploadClient,
    tailor_client: TailorClient,
    export_client: ExportClient,
}

impl BackendStages {
    /// Build the stage set from a backend config. A blank base URL is
    /// rejected here, before any network call is ever attempted.
    pub fn new(config: BackendConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            upload_client: UploadClient::new(config.clone()),
            tailor_client: TailorClient::new(config.clone()),
            export_client: ExportClient::new(config),
        })
    }
}

#[async_trait]
impl WorkflowStages for BackendStages {
    async fn submit(&self, document: &ResumeDocument) -> Result<ResumeHandle> {
        self.upload_client.submit(document).await
    }

    async fn tailor(
        &self,
        handle: &ResumeHandle,
        inputs: &TailoringInputs,
    ) -> Result<TailoringResult> {
        self.tailor_client.tailor(handle, inputs).await
    }

    async fn export(&self, content: &str, filename: &str, title: &str) -> Result<ExportArtifact> {
        self.export_client.export(content, filename, title).await
    }
}
