//! Azure AI Search REST client.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::sample::TrustedArticle;
use crate::schema::index_definition;

const API_VERSION: &str = "2023-11-01";

/// Fields returned for each corroborating hit.
const SELECT_FIELDS: &str = "title,content,source";

/// One document returned by a full-text query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "@search.score", default)]
    pub score: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    value: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    search: &'a str,
    select: &'static str,
    top: u32,
}

#[derive(Debug, Serialize)]
struct IndexBatch<'a> {
    value: Vec<IndexAction<'a>>,
}

#[derive(Debug, Serialize)]
struct IndexAction<'a> {
    #[serde(rename = "@search.action")]
    action: &'static str,
    #[serde(flatten)]
    document: &'a TrustedArticle,
}

#[derive(Debug, Deserialize)]
struct IndexResponse {
    #[serde(default)]
    value: Vec<IndexResult>,
}

#[derive(Debug, Deserialize)]
struct IndexResult {
    key: String,
    status: bool,
    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
}

/// Result of a document upload batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Client bound to one index on one search service.
pub struct SearchClient {
    client: Client,
    base: Url,
    key: String,
    index: String,
}

impl SearchClient {
    /// Creates a client for `index` on the service at `endpoint`
    /// (e.g. `https://<name>.search.windows.net`).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidEndpoint`] if the
    /// endpoint is not a valid URL.
    pub fn new(
        endpoint: &str,
        key: &str,
        index: &str,
        timeout_secs: u64,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let trimmed = endpoint.trim_end_matches('/');
        let base = Url::parse(&format!("{trimmed}/")).map_err(|e| SearchError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base,
            key: key.to_owned(),
            index: index.to_owned(),
        })
    }

    #[must_use]
    pub fn index_name(&self) -> &str {
        &self.index
    }

    fn url(&self, path: &str) -> Result<Url, SearchError> {
        let mut url = self.base.join(path).map_err(|e| SearchError::InvalidEndpoint {
            endpoint: self.base.to_string(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("api-version", API_VERSION);
        Ok(url)
    }

    /// Runs a full-text query for `text` and returns at most `top` hits.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on network failure or an undecodable body,
    /// and [`SearchError::Status`] on any non-2xx response.
    pub async fn search(&self, text: &str, top: u32) -> Result<Vec<SearchHit>, SearchError> {
        let url = self.url(&format!("indexes/{}/docs/search", self.index))?;
        let request = SearchRequest {
            search: text,
            select: SELECT_FIELDS,
            top,
        };

        let response = self
            .client
            .post(url)
            .header("api-key", &self.key)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let parsed: SearchResponse = response.json().await?;
        let mut hits = parsed.value;
        hits.truncate(usize::try_from(top).unwrap_or(usize::MAX));
        Ok(hits)
    }

    /// Number of corroborating hits for `text`, at most `top`.
    ///
    /// # Errors
    ///
    /// See [`SearchClient::search`].
    pub async fn count_matches(&self, text: &str, top: u32) -> Result<usize, SearchError> {
        let hits = self.search(text, top).await?;
        tracing::debug!(index = %self.index, matches = hits.len(), "corroboration search");
        Ok(hits.len())
    }

    /// Creates the index, or updates its schema if it already exists.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Status`] if the service rejects the definition.
    pub async fn create_or_update_index(&self) -> Result<(), SearchError> {
        let url = self.url(&format!("indexes/{}", self.index))?;
        let response = self
            .client
            .put(url)
            .header("api-key", &self.key)
            .json(&index_definition(&self.index))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// Uploads `documents` with `mergeOrUpload`, so existing keys are
    /// overwritten in place.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Status`] for a rejected batch and
    /// [`SearchError::PartialUpload`] when some documents failed individually.
    pub async fn upload_documents(
        &self,
        documents: &[TrustedArticle],
    ) -> Result<UploadSummary, SearchError> {
        if documents.is_empty() {
            return Ok(UploadSummary {
                succeeded: 0,
                failed: 0,
            });
        }

        let url = self.url(&format!("indexes/{}/docs/index", self.index))?;
        let batch = IndexBatch {
            value: documents
                .iter()
                .map(|document| IndexAction {
                    action: "mergeOrUpload",
                    document,
                })
                .collect(),
        };

        let response = self
            .client
            .post(url)
            .header("api-key", &self.key)
            .json(&batch)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let parsed: IndexResponse = response.json().await?;
        let mut summary = UploadSummary {
            succeeded: 0,
            failed: 0,
        };
        for result in &parsed.value {
            if result.status {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
                tracing::warn!(
                    key = %result.key,
                    error = result.error_message.as_deref().unwrap_or("unknown"),
                    "document rejected by index"
                );
            }
        }

        if summary.failed > 0 {
            return Err(SearchError::PartialUpload {
                failed: summary.failed,
                total: parsed.value.len(),
            });
        }
        Ok(summary)
    }
}

async fn ensure_success(response: Response) -> Result<Response, SearchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_owned))
        .unwrap_or(body);
    Err(SearchError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_index_path_and_version() {
        let client =
            SearchClient::new("https://search.example.net/", "k", "news-index", 5).expect("client");
        let url = client
            .url("indexes/news-index/docs/search")
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://search.example.net/indexes/news-index/docs/search?api-version=2023-11-01"
        );
    }

    #[test]
    fn new_rejects_invalid_endpoint() {
        assert!(matches!(
            SearchClient::new("::not-a-url", "k", "news-index", 5),
            Err(SearchError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn search_hit_tolerates_missing_fields() {
        let hit: SearchHit =
            serde_json::from_str(r#"{"@search.score": 1.5, "title": "EU aid"}"#).expect("hit");
        assert!((hit.score - 1.5).abs() < f64::EPSILON);
        assert_eq!(hit.title.as_deref(), Some("EU aid"));
        assert!(hit.content.is_none());
    }
}
