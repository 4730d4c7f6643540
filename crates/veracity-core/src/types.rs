use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document-level sentiment label reported by the sentiment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            "mixed" => Ok(SentimentLabel::Mixed),
            other => Err(format!("unknown sentiment label \"{other}\"")),
        }
    }
}

/// Per-class confidence scores, each in `[0.0, 1.0]`.
///
/// The sentiment service reports three classes; `mixed` has no score of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl ConfidenceScores {
    /// Largest of the three class scores.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.positive.max(self.neutral).max(self.negative)
    }
}

/// Result of the sentiment stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentOutcome {
    pub label: SentimentLabel,
    pub scores: ConfidenceScores,
}

impl SentimentOutcome {
    /// Confidence in the reported label.
    ///
    /// For `mixed` there is no matching class score, so the strongest class
    /// score is used instead.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        match self.label {
            SentimentLabel::Positive => self.scores.positive,
            SentimentLabel::Negative => self.scores.negative,
            SentimentLabel::Neutral => self.scores.neutral,
            SentimentLabel::Mixed => self.scores.max(),
        }
    }
}

/// One completed credibility assessment. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub confidence_scores: ConfidenceScores,
    pub is_fake: bool,
    pub credibility_score: f64,
    /// `true` when the search service could not be reached and the neutral
    /// credibility fallback was used.
    pub corroboration_degraded: bool,
    pub policy_version: String,
    /// Present iff the analysis was requested by URL.
    pub source_url: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}
