//! HTTP fetch side of article extraction.

use std::time::Duration;

use reqwest::{Client, Response, Url};

use crate::error::ExtractError;
use crate::html::{collapse_whitespace, extract_article_text, MIN_TEXT_LEN};

/// Validates that `raw` is an absolute `http`/`https` URL.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidUrl`] if the URL does not parse, uses another
/// scheme, or has no host.
pub fn parse_article_url(raw: &str) -> Result<Url, ExtractError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| ExtractError::InvalidUrl {
        url: trimmed.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ExtractError::InvalidUrl {
            url: trimmed.to_owned(),
            reason: format!("unsupported scheme \"{}\"", url.scheme()),
        });
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ExtractError::InvalidUrl {
            url: trimmed.to_owned(),
            reason: "missing host".to_owned(),
        });
    }

    Ok(url)
}

/// Largest page body read before giving up.
pub const DEFAULT_MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Downloads pages and extracts their main article text.
///
/// Non-2xx responses, non-HTML bodies, oversized bodies, and pages without
/// recognisable article text are all reported as typed errors. No retries.
pub struct ArticleExtractor {
    client: Client,
    max_body_bytes: usize,
}

impl ArticleExtractor {
    /// Creates an extractor with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    /// Overrides the body size cap ([`DEFAULT_MAX_BODY_BYTES`] by default).
    #[must_use]
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Fetches `url` and returns its main article text.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidUrl`]: not an absolute `http`/`https` URL.
    /// - [`ExtractError::Http`]: network or TLS failure.
    /// - [`ExtractError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ExtractError::UnsupportedContent`]: body is neither HTML nor plain text.
    /// - [`ExtractError::BodyTooLarge`]: body is longer than the configured cap.
    /// - [`ExtractError::NoArticleText`]: nothing article-like in the page.
    pub async fn fetch_article_text(&self, url: &str) -> Result<String, ExtractError> {
        let parsed = parse_article_url(url)?;
        let url = parsed.to_string();

        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let is_html = content_type.is_empty() || content_type.contains("html");
        if !is_html && !content_type.starts_with("text/plain") {
            return Err(ExtractError::UnsupportedContent { content_type, url });
        }

        let body = self.read_body(response, &url).await?;

        let text = if is_html {
            extract_article_text(&body)
        } else {
            Some(collapse_whitespace(&body)).filter(|t| t.chars().count() >= MIN_TEXT_LEN)
        };

        match text {
            Some(text) => {
                tracing::debug!(url = %url, chars = text.chars().count(), "extracted article text");
                Ok(text)
            }
            None => Err(ExtractError::NoArticleText { url }),
        }
    }

    /// Reads the body chunk by chunk, stopping once it passes the cap.
    async fn read_body(&self, mut response: Response, url: &str) -> Result<String, ExtractError> {
        let limit = self.max_body_bytes;
        let too_large = || ExtractError::BodyTooLarge {
            url: url.to_owned(),
            limit,
        };

        if let Some(declared) = response.content_length() {
            if declared > u64::try_from(limit).unwrap_or(u64::MAX) {
                return Err(too_large());
            }
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if bytes.len() + chunk.len() > limit {
                return Err(too_large());
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
