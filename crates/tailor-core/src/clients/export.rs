//! Export client for artifact generation

use crate::config::BackendConfig;
use crate::error::{Result, TailorError};
use crate::types::ExportArtifact;
use reqwest::Client as HttpClient;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ExportRequest<'a> {
    filename: &'a str,
    title: &'a str,
    content: &'a str,
}

#[derive(Debug)]
pub struct ExportClient {
    config: BackendConfig,
    http_client: HttpClient,
}

impl ExportClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http_client: super::build_http_client(),
        }
    }

    /// Request generation of a downloadable artifact from tailored text.
    ///
    /// Content emptiness is not validated here; an empty export is a
    /// legal, if useless, request. Any non-success status or
    /// undecodable body collapses into `ExportFailed`.
    pub async fn export(
        &self,
        content: &str,
        filename: &str,
        title: &str,
    ) -> Result<ExportArtifact> {
        let url = format!("{}/export", self.config.endpoint_base());
        let payload = ExportRequest {
            filename,
            title,
            content,
        };

        log::info!("Requesting export of '{}' ({} chars)", filename, content.len());

        let response = self
            .http_client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TailorError::ExportFailed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TailorError::ExportFailed(format!(
                "backend returned {} - {}",
                status, error_text
            )));
        }

        let artifact: ExportArtifact = response
            .json()
            .await
            .map_err(|e| TailorError::ExportFailed(format!("invalid response body: {}", e)))?;

        log::info!("Export complete, download URL: {}", artifact.download_url);
        Ok(artifact)
    }
}
