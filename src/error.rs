use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Upstream unreachable, timed out, or answered with a non-2xx status.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Extraction error: {0}")]
    Extraction(String),
}
