use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid article URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("unsupported content type \"{content_type}\" from {url}")]
    UnsupportedContent { content_type: String, url: String },

    #[error("response body from {url} exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: usize },

    #[error("no article text could be extracted from {url}")]
    NoArticleText { url: String },
}
