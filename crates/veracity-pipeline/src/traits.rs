//! Collaborator seams of the pipeline.

use async_trait::async_trait;
use veracity_core::{AnalysisResult, SentimentOutcome};
use veracity_db::DbError;
use veracity_extract::ExtractError;
use veracity_search::SearchError;
use veracity_sentiment::SentimentError;

/// Turns a URL into article text.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, ExtractError>;
}

/// Scores the sentiment of a document.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<SentimentOutcome, SentimentError>;
}

/// Counts trusted articles that corroborate a document.
#[async_trait]
pub trait CorroborationSearch: Send + Sync {
    /// Returns at most `top` matches.
    async fn count_matches(&self, text: &str, top: u32) -> Result<usize, SearchError>;
}

/// Whether a result reached the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Stored,
    Failed(String),
}

/// Best-effort destination for completed analyses.
///
/// Implementations report failure through [`PersistOutcome`] instead of an
/// error; the caller never fails a request because of it.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn persist(&self, result: &AnalysisResult) -> PersistOutcome;
}

/// Read side of the result store.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Most recent results, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisResult>, DbError>;
}
