//! Tailoring client for the analysis/rewrite stage

use crate::config::BackendConfig;
use crate::error::{Result, TailorError};
use crate::types::{ResumeHandle, TailoringInputs, TailoringResult};
use reqwest::Client as HttpClient;
use serde::Serialize;

/// Wire shape of the tailoring request. Optional fields are omitted
/// entirely when the corresponding input is empty or whitespace-only,
/// so the backend's own defaulting governs their absence.
#[derive(Debug, Serialize)]
pub(crate) struct TailorRequest {
    pub resume_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
}

impl TailorRequest {
    pub(crate) fn build(handle: &ResumeHandle, inputs: &TailoringInputs) -> Self {
        Self {
            resume_id: handle.id.clone(),
            jd_url: trimmed(&inputs.job_description_url),
            jd_text: trimmed(&inputs.job_description_text),
            company_url: trimmed(&inputs.company_url),
        }
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[derive(Debug)]
pub struct TailorClient {
    config: BackendConfig,
    http_client: HttpClient,
}

impl TailorClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http_client: super::build_http_client(),
        }
    }

    /// Request a tailoring pass for an uploaded resume.
    ///
    /// The handle's identifier is echoed verbatim. Any non-success
    /// status or undecodable body collapses into `TailorFailed`.
    pub async fn tailor(
        &self,
        handle: &ResumeHandle,
        inputs: &TailoringInputs,
    ) -> Result<TailoringResult> {
        let url = format!("{}/tailor", self.config.endpoint_base());
        let payload = TailorRequest::build(handle, inputs);

        log::info!("Requesting tailoring for resume_id: {}", payload.resume_id);

        let response = self
            .http_client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TailorError::TailorFailed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TailorError::TailorFailed(format!(
                "backend returned {} - {}",
                status, error_text
            )));
        }

        let result: TailoringResult = response
            .json()
            .await
            .map_err(|e| TailorError::TailorFailed(format!("invalid response body: {}", e)))?;

        log::info!(
            "Tailoring complete: {} change log entries, fit score {}",
            result.change_log.len(),
            result
                .fit_score
                .as_ref()
                .map(|f| f.score.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        );
        Ok(result)
    }
}
