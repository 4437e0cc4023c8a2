//! Upload client for the submission stage

use crate::config::BackendConfig;
use crate::error::{Result, TailorError};
use crate::types::{ResumeDocument, ResumeHandle};
use reqwest::{multipart, Client as HttpClient};

#[derive(Debug)]
pub struct UploadClient {
    config: BackendConfig,
    http_client: HttpClient,
}

impl UploadClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http_client: super::build_http_client(),
        }
    }

    /// Upload a resume document and return the server-side handle.
    ///
    /// An empty payload is a local validation failure; no request is
    /// sent. Any non-success status, transport error or undecodable
    /// body collapses into `UploadFailed`.
    pub async fn submit(&self, document: &ResumeDocument) -> Result<ResumeHandle> {
        if document.bytes.is_empty() {
            return Err(TailorError::MissingInput(
                "select a resume document first".to_string(),
            ));
        }

        let url = format!("{}/upload", self.config.endpoint_base());

        let file_part = multipart::Part::bytes(document.bytes.clone())
            .file_name(document.filename.clone());
        let form = multipart::Form::new().part("file", file_part);

        log::info!(
            "Uploading '{}' ({} bytes) to {}",
            document.filename,
            document.bytes.len(),
            url
        );

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TailorError::UploadFailed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TailorError::UploadFailed(format!(
                "backend returned {} - {}",
                status, error_text
            )));
        }

        let handle: ResumeHandle = response
            .json()
            .await
            .map_err(|e| TailorError::UploadFailed(format!("invalid response body: {}", e)))?;

        log::info!("Upload complete, resume_id: {}", handle.id);
        Ok(handle)
    }
}
