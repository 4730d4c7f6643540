use thiserror::Error;
use veracity_db::DbError;
use veracity_extract::ExtractError;
use veracity_sentiment::SentimentError;

/// Failures that abort an analysis or a history read.
///
/// Search and persistence failures never surface here; the pipeline absorbs
/// both.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("either url or text must be provided")]
    MissingInput,

    #[error("invalid url \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to extract article text: {0}")]
    Extraction(#[source] ExtractError),

    #[error("sentiment analysis failed: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("failed to load history: {0}")]
    History(#[from] DbError),
}

impl From<ExtractError> for PipelineError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::InvalidUrl { url, reason } => PipelineError::InvalidUrl { url, reason },
            other => PipelineError::Extraction(other),
        }
    }
}

impl PipelineError {
    /// Stable machine-readable code for API error bodies.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::MissingInput | PipelineError::InvalidUrl { .. } => "bad_request",
            PipelineError::Extraction(_) => "extraction_failed",
            PipelineError::Sentiment(_) => "sentiment_failed",
            PipelineError::History(_) => "internal_error",
        }
    }

    /// `true` when the caller supplied bad input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.code() == "bad_request"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_extract_error_becomes_client_error() {
        let err = PipelineError::from(ExtractError::InvalidUrl {
            url: "ftp://x".to_string(),
            reason: "unsupported scheme".to_string(),
        });
        assert!(err.is_client_error());
        assert_eq!(err.code(), "bad_request");
    }

    #[test]
    fn extraction_failures_are_server_side() {
        let err = PipelineError::from(ExtractError::NoArticleText {
            url: "https://example.com".to_string(),
        });
        assert!(!err.is_client_error());
        assert_eq!(err.code(), "extraction_failed");

        let err = PipelineError::from(ExtractError::BodyTooLarge {
            url: "https://example.com".to_string(),
            limit: 1024,
        });
        assert_eq!(err.code(), "extraction_failed");
    }

    #[test]
    fn sentiment_and_history_codes() {
        assert_eq!(
            PipelineError::from(SentimentError::EmptyText).code(),
            "sentiment_failed"
        );
        assert_eq!(
            PipelineError::from(DbError::InvalidRow {
                id: uuid::Uuid::nil(),
                reason: "unknown sentiment label".to_string(),
            })
            .code(),
            "internal_error"
        );
    }
}
