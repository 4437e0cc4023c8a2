//! Error types for the resume tailoring workflow

use thiserror::Error;

/// Main error type for all workflow operations.
///
/// Each network stage collapses its failures (transport error, non-2xx
/// status, undecodable success body) into the single stage-tagged
/// variant; callers never inspect transport-level detail. All variants
/// carry a `String` so the enum stays `Clone` and can live inside
/// state snapshots.
#[derive(Error, Debug, Clone)]
pub enum TailorError {
    #[error("Backend URL is not configured: {0}")]
    ConfigurationMissing(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Tailoring failed: {0}")]
    TailorFailed(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

impl TailorError {
    /// Stable label for the failed stage, used in logs.
    pub fn stage(&self) -> &'static str {
        match self {
            TailorError::ConfigurationMissing(_) => "config",
            TailorError::MissingInput(_) => "input",
            TailorError::UploadFailed(_) => "upload",
            TailorError::TailorFailed(_) => "tailor",
            TailorError::ExportFailed(_) => "export",
        }
    }
}

/// Result type for workflow operations
pub type Result<T> = std::result::Result<T, TailorError>;
