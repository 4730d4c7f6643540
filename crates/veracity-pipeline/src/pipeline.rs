//! Per-request orchestration.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use veracity_core::{AnalysisResult, Corroboration, VerdictPolicy, BASELINE_V1};

use crate::error::PipelineError;
use crate::request::{AnalysisInput, AnalysisRequest};
use crate::traits::{
    ArticleSource, CorroborationSearch, PersistOutcome, ResultSink, SentimentAnalyzer,
};

/// Hits requested from the search service per analysis.
pub const DEFAULT_SEARCH_TOP: u32 = 5;

/// Service clients the pipeline calls, constructed once at startup.
#[derive(Clone)]
pub struct Collaborators {
    pub articles: Arc<dyn ArticleSource>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
    pub search: Arc<dyn CorroborationSearch>,
    pub sink: Arc<dyn ResultSink>,
}

/// Runs one analysis end-to-end: acquire text, score sentiment, score
/// corroboration, apply the verdict policy, persist.
///
/// Stages run sequentially. The pipeline holds no mutable state and is
/// shared across requests behind an `Arc`.
#[derive(Clone)]
pub struct AnalysisPipeline {
    collaborators: Collaborators,
    policy: VerdictPolicy,
    search_top: u32,
}

impl AnalysisPipeline {
    #[must_use]
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            collaborators,
            policy: BASELINE_V1,
            search_top: DEFAULT_SEARCH_TOP,
        }
    }

    /// Overrides the number of hits requested from search. Zero is raised to one.
    #[must_use]
    pub fn with_search_top(mut self, top: u32) -> Self {
        self.search_top = top.max(1);
        self
    }

    #[must_use]
    pub fn policy(&self) -> &VerdictPolicy {
        &self.policy
    }

    /// Analyzes one request and returns the stored (or attempted) result.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingInput`] / [`PipelineError::InvalidUrl`] for bad input.
    /// - [`PipelineError::Extraction`] when the URL yields no article text.
    /// - [`PipelineError::Sentiment`] when the sentiment service fails.
    ///
    /// Search failures fall back to neutral credibility and persistence
    /// failures are logged; neither is returned.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, PipelineError> {
        let input = request.into_input()?;

        let (text, source_url) = match input {
            AnalysisInput::Url(url) => {
                let text = self.collaborators.articles.fetch_text(&url).await?;
                (text, Some(url))
            }
            AnalysisInput::Text(text) => (text, None),
        };

        let sentiment = self.collaborators.sentiment.analyze(&text).await?;

        let corroboration = match self
            .collaborators
            .search
            .count_matches(&text, self.search_top)
            .await
        {
            Ok(matches) => Corroboration::from_matches(matches),
            Err(e) => {
                tracing::warn!(error = %e, "corroboration search failed; using neutral credibility");
                Corroboration::Unavailable
            }
        };

        let result = AnalysisResult {
            id: Uuid::new_v4(),
            is_fake: self.policy.is_fake(&sentiment, &corroboration),
            confidence: sentiment.confidence(),
            sentiment: sentiment.label,
            confidence_scores: sentiment.scores,
            credibility_score: corroboration.credibility(),
            corroboration_degraded: corroboration.is_degraded(),
            policy_version: self.policy.version.to_owned(),
            source_url,
            analyzed_at: Utc::now(),
            text,
        };

        match self.collaborators.sink.persist(&result).await {
            PersistOutcome::Stored => {
                tracing::debug!(id = %result.id, "analysis result stored");
            }
            PersistOutcome::Failed(reason) => {
                tracing::warn!(id = %result.id, reason = %reason, "failed to persist analysis result");
            }
        }

        tracing::info!(
            id = %result.id,
            sentiment = %result.sentiment,
            credibility = result.credibility_score,
            is_fake = result.is_fake,
            degraded = result.corroboration_degraded,
            "analysis complete"
        );

        Ok(result)
    }
}
