//! Client adapters for the backend tailoring service

pub mod export;
pub mod tailor;
pub mod upload;

pub use export::ExportClient;
pub use tailor::TailorClient;
pub use upload::UploadClient;

use std::time::Duration;

/// All three adapters use the same transport settings; the backend
/// may take a while on tailoring, so the timeout is generous.
pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .expect("Failed to create HTTP client")
}
