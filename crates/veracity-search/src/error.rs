use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid search endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("search service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{failed} of {total} documents were rejected by the index")]
    PartialUpload { failed: usize, total: usize },
}
