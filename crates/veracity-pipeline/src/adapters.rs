//! Trait implementations for the concrete service clients.

use async_trait::async_trait;
use sqlx::PgPool;
use veracity_core::{AnalysisResult, SentimentOutcome};
use veracity_db::DbError;
use veracity_extract::{ArticleExtractor, ExtractError};
use veracity_search::{SearchClient, SearchError};
use veracity_sentiment::{SentimentClient, SentimentError};

use crate::traits::{
    ArticleSource, CorroborationSearch, HistorySource, PersistOutcome, ResultSink,
    SentimentAnalyzer,
};

#[async_trait]
impl ArticleSource for ArticleExtractor {
    async fn fetch_text(&self, url: &str) -> Result<String, ExtractError> {
        self.fetch_article_text(url).await
    }
}

#[async_trait]
impl SentimentAnalyzer for SentimentClient {
    async fn analyze(&self, text: &str) -> Result<SentimentOutcome, SentimentError> {
        SentimentClient::analyze(self, text).await
    }
}

#[async_trait]
impl CorroborationSearch for SearchClient {
    async fn count_matches(&self, text: &str, top: u32) -> Result<usize, SearchError> {
        SearchClient::count_matches(self, text, top).await
    }
}

/// Postgres-backed result store.
#[derive(Debug, Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultSink for PgResultStore {
    async fn persist(&self, result: &AnalysisResult) -> PersistOutcome {
        match veracity_db::insert_analysis_result(&self.pool, result).await {
            Ok(()) => PersistOutcome::Stored,
            Err(e) => PersistOutcome::Failed(e.to_string()),
        }
    }
}

#[async_trait]
impl HistorySource for PgResultStore {
    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisResult>, DbError> {
        veracity_db::list_recent_analysis_results(&self.pool, limit).await
    }
}
