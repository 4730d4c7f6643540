//! Request body for `POST /analyze` and its validation.

use serde::Deserialize;
use veracity_extract::parse_article_url;

use crate::error::PipelineError;

/// Raw analysis request. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Validated input: exactly one source of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    /// Absolute `http`/`https` URL, trimmed.
    Url(String),
    Text(String),
}

impl AnalysisRequest {
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            text: None,
        }
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            url: None,
            text: Some(text.into()),
        }
    }

    /// Picks the input to analyze.
    ///
    /// A non-blank URL wins over text. Blank values count as absent.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingInput`] when neither field has content.
    /// - [`PipelineError::InvalidUrl`] when the URL is not absolute `http`/`https`.
    pub fn into_input(self) -> Result<AnalysisInput, PipelineError> {
        let url = self.url.filter(|u| !u.trim().is_empty());
        let text = self.text.filter(|t| !t.trim().is_empty());

        match (url, text) {
            (Some(url), text) => {
                if text.is_some() {
                    tracing::debug!("both url and text supplied; using url");
                }
                parse_article_url(&url)?;
                Ok(AnalysisInput::Url(url.trim().to_owned()))
            }
            (None, Some(text)) => Ok(AnalysisInput::Text(text)),
            (None, None) => Err(PipelineError::MissingInput),
        }
    }
}
