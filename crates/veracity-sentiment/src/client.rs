//! Azure AI Language sentiment client.

use std::time::Duration;

use reqwest::{Client, Url};
use veracity_core::{ConfidenceScores, SentimentLabel, SentimentOutcome};

use crate::error::SentimentError;
use crate::wire::{
    AnalysisInput, AnalyzeParameters, AnalyzeTextRequest, AnalyzeTextResponse, ErrorEnvelope,
    InputDocument,
};

const API_VERSION: &str = "2023-04-01";

/// Per-document character limit of the synchronous sentiment API.
/// Longer inputs are truncated before sending.
pub const MAX_DOCUMENT_CHARS: usize = 5120;

/// Client for document-level sentiment analysis.
///
/// Use [`SentimentClient::new`] with the resource endpoint
/// (e.g. `https://<name>.cognitiveservices.azure.com`) and key.
pub struct SentimentClient {
    client: Client,
    url: Url,
    key: String,
}

impl SentimentClient {
    /// Creates a client for the given resource endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SentimentError::InvalidEndpoint`] if the
    /// endpoint is not a valid URL.
    pub fn new(endpoint: &str, key: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let base = endpoint.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/language/:analyze-text")).map_err(|e| {
            SentimentError::InvalidEndpoint {
                endpoint: endpoint.to_owned(),
                reason: e.to_string(),
            }
        })?;
        url.query_pairs_mut().append_pair("api-version", API_VERSION);

        Ok(Self {
            client,
            url,
            key: key.to_owned(),
        })
    }

    /// Scores one document.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::EmptyText`]: `text` is blank.
    /// - [`SentimentError::Http`]: network failure or undecodable body.
    /// - [`SentimentError::Status`]: non-2xx response.
    /// - [`SentimentError::Document`]: the service rejected the document.
    /// - [`SentimentError::MissingDocument`] / [`SentimentError::UnknownLabel`]:
    ///   the response does not match the documented contract.
    pub async fn analyze(&self, text: &str) -> Result<SentimentOutcome, SentimentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SentimentError::EmptyText);
        }

        let document = truncate_chars(text, MAX_DOCUMENT_CHARS);
        if document.len() < text.len() {
            tracing::debug!(
                original_chars = text.chars().count(),
                sent_chars = MAX_DOCUMENT_CHARS,
                "truncating document for sentiment analysis"
            );
        }

        let request = AnalyzeTextRequest {
            kind: "SentimentAnalysis",
            parameters: AnalyzeParameters {
                model_version: "latest",
                opinion_mining: false,
            },
            analysis_input: AnalysisInput {
                documents: vec![InputDocument {
                    id: "1",
                    text: document,
                }],
            },
        };

        let response = self
            .client
            .post(self.url.clone())
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(SentimentError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnalyzeTextResponse = response.json().await?;

        if let Some(doc_error) = parsed.results.errors.into_iter().next() {
            return Err(SentimentError::Document {
                code: doc_error.error.code,
                message: doc_error.error.message,
            });
        }

        let document = parsed
            .results
            .documents
            .into_iter()
            .next()
            .ok_or(SentimentError::MissingDocument)?;

        let label = document
            .sentiment
            .parse::<SentimentLabel>()
            .map_err(|_| SentimentError::UnknownLabel(document.sentiment.clone()))?;

        Ok(SentimentOutcome {
            label,
            scores: ConfidenceScores {
                positive: document.confidence_scores.positive,
                neutral: document.confidence_scores.neutral,
                negative: document.confidence_scores.negative,
            },
        })
    }
}

/// Returns the longest prefix of `text` with at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_chars_keeps_short_text() {
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        let text = "ééééé";
        assert_eq!(truncate_chars(text, 3), "ééé");
    }

    #[test]
    fn new_builds_versioned_url() {
        let client = SentimentClient::new("https://lang.example.com/", "key", 5).expect("client");
        assert_eq!(
            client.url.as_str(),
            "https://lang.example.com/language/:analyze-text?api-version=2023-04-01"
        );
    }

    #[test]
    fn new_rejects_invalid_endpoint() {
        assert!(matches!(
            SentimentClient::new("not a url", "key", 5),
            Err(SentimentError::InvalidEndpoint { .. })
        ));
    }
}
