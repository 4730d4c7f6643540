use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("sentiment service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("sentiment service rejected the document ({code}): {message}")]
    Document { code: String, message: String },

    #[error("sentiment response contained no document result")]
    MissingDocument,

    #[error("unrecognised sentiment label \"{0}\"")]
    UnknownLabel(String),

    #[error("cannot analyse empty text")]
    EmptyText,
}
