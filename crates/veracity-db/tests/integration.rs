//! Tests for veracity-db. The `sqlx::test` cases need a reachable
//! `DATABASE_URL`; each runs against a fresh migrated database.

use chrono::{Duration, Utc};
use uuid::Uuid;
use veracity_core::{AnalysisResult, ConfidenceScores, DatabaseConfig, SentimentLabel};
use veracity_db::{insert_analysis_result, list_recent_analysis_results, PoolConfig};

fn database_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "postgres://example".to_string(),
        max_connections: 42,
        min_connections: 7,
        acquire_timeout_secs: 9,
        history_limit: 10,
    }
}

fn result_at(minutes_ago: i64, source_url: Option<&str>) -> AnalysisResult {
    AnalysisResult {
        id: Uuid::new_v4(),
        text: format!("article analysed {minutes_ago} minutes ago"),
        sentiment: SentimentLabel::Negative,
        confidence: 0.85,
        confidence_scores: ConfidenceScores {
            positive: 0.05,
            neutral: 0.1,
            negative: 0.85,
        },
        is_fake: true,
        credibility_score: 0.2,
        corroboration_degraded: false,
        policy_version: "baseline-v1".to_string(),
        source_url: source_url.map(str::to_string),
        analyzed_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

#[test]
fn pool_config_from_database_config_uses_core_values() {
    let pool_config = PoolConfig::from_database_config(&database_config());
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[sqlx::test(migrations = "../../migrations")]
async fn inserted_result_reads_back_unchanged(pool: sqlx::PgPool) {
    let original = result_at(1, Some("https://example.com/story"));
    insert_analysis_result(&pool, &original)
        .await
        .expect("insert");

    let rows = list_recent_analysis_results(&pool, 10).await.expect("list");
    assert_eq!(rows.len(), 1);
    let stored = &rows[0];
    assert_eq!(stored.id, original.id);
    assert_eq!(stored.sentiment, SentimentLabel::Negative);
    assert!(stored.is_fake);
    assert_eq!(stored.source_url.as_deref(), Some("https://example.com/story"));
    assert_eq!(
        stored.analyzed_at.timestamp_micros(),
        original.analyzed_at.timestamp_micros()
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn history_is_newest_first_and_limited(pool: sqlx::PgPool) {
    for minutes_ago in 0..12 {
        insert_analysis_result(&pool, &result_at(minutes_ago, None))
            .await
            .expect("insert");
    }

    let rows = list_recent_analysis_results(&pool, 10).await.expect("list");
    assert_eq!(rows.len(), 10);
    assert!(rows
        .windows(2)
        .all(|pair| pair[0].analyzed_at >= pair[1].analyzed_at));
    assert!(rows[0].text.contains("analysed 0 minutes"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_id_is_rejected(pool: sqlx::PgPool) {
    let result = result_at(0, None);
    insert_analysis_result(&pool, &result)
        .await
        .expect("first insert");
    assert!(insert_analysis_result(&pool, &result).await.is_err());
}
