//! Database operations for the `analysis_results` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use veracity_core::{AnalysisResult, ConfidenceScores, SentimentLabel};

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `analysis_results` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnalysisResultRow {
    pub id: Uuid,
    pub text: String,
    pub sentiment: String,
    pub confidence: f64,
    pub positive_score: f64,
    pub neutral_score: f64,
    pub negative_score: f64,
    pub is_fake: bool,
    pub credibility_score: f64,
    pub corroboration_degraded: bool,
    pub policy_version: String,
    pub source_url: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}

impl TryFrom<AnalysisResultRow> for AnalysisResult {
    type Error = DbError;

    fn try_from(row: AnalysisResultRow) -> Result<Self, Self::Error> {
        let sentiment = row
            .sentiment
            .parse::<SentimentLabel>()
            .map_err(|reason| DbError::InvalidRow { id: row.id, reason })?;

        Ok(AnalysisResult {
            id: row.id,
            text: row.text,
            sentiment,
            confidence: row.confidence,
            confidence_scores: ConfidenceScores {
                positive: row.positive_score,
                neutral: row.neutral_score,
                negative: row.negative_score,
            },
            is_fake: row.is_fake,
            credibility_score: row.credibility_score,
            corroboration_degraded: row.corroboration_degraded,
            policy_version: row.policy_version,
            source_url: row.source_url,
            analyzed_at: row.analyzed_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert a completed analysis keyed by its generated id.
///
/// Results are immutable: a second insert with the same id fails with a
/// unique-violation rather than overwriting.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_analysis_result(pool: &PgPool, result: &AnalysisResult) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO analysis_results \
             (id, text, sentiment, confidence, positive_score, neutral_score, negative_score, \
              is_fake, credibility_score, corroboration_degraded, policy_version, source_url, \
              analyzed_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(result.id)
    .bind(&result.text)
    .bind(result.sentiment.as_str())
    .bind(result.confidence)
    .bind(result.confidence_scores.positive)
    .bind(result.confidence_scores.neutral)
    .bind(result.confidence_scores.negative)
    .bind(result.is_fake)
    .bind(result.credibility_score)
    .bind(result.corroboration_degraded)
    .bind(&result.policy_version)
    .bind(result.source_url.as_deref())
    .bind(result.analyzed_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// List the most recent analyses, newest first.
///
/// Ordered by `analyzed_at DESC` then `id` for a stable tiebreak.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or [`DbError::InvalidRow`]
/// if a stored sentiment label is not recognised.
pub async fn list_recent_analysis_results(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<AnalysisResult>, DbError> {
    let rows = sqlx::query_as::<_, AnalysisResultRow>(
        "SELECT id, text, sentiment, confidence, positive_score, neutral_score, negative_score, \
                is_fake, credibility_score, corroboration_degraded, policy_version, source_url, \
                analyzed_at \
         FROM analysis_results \
         ORDER BY analyzed_at DESC, id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(AnalysisResult::try_from).collect()
}
