// Network collaborators: job-board posting sources and the JD text fetch.
// Failures surface as explicit errors; the runner decides what a failed
// fetch means (always: log and continue with an empty result).

pub mod greenhouse;
pub mod jd;
pub mod lever;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::posting::Posting;

/// Request timeout shared by board and JD fetches.
const FETCH_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

/// A job-board posting source. Implementations fetch one board and
/// normalize its openings into `Posting` records.
#[async_trait]
pub trait PostingSource: Send + Sync {
    /// Label used in logs, e.g. `Greenhouse:acme`.
    fn name(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Posting>, SourceError>;
}

/// Fetches the raw job-description text behind a posting URL.
#[async_trait]
pub trait JdFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError>;
}

/// Builds the HTTP client shared by all source collaborators.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client")
}
