//! Fake/not-fake verdict policy.

use crate::credibility::Corroboration;
use crate::types::{SentimentLabel, SentimentOutcome};

/// Thresholds for deciding whether an input is likely fabricated.
///
/// With measured corroboration the input is flagged when credibility is below
/// `min_credibility`, or when sentiment is negative with confidence above
/// `negative_confidence`. Without corroboration only the sentiment arm applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictPolicy {
    pub version: &'static str,
    pub min_credibility: f64,
    pub negative_confidence: f64,
}

/// The policy applied to every analysis.
pub const BASELINE_V1: VerdictPolicy = VerdictPolicy {
    version: "baseline-v1",
    min_credibility: 0.4,
    negative_confidence: 0.8,
};

impl Default for VerdictPolicy {
    fn default() -> Self {
        BASELINE_V1
    }
}

impl VerdictPolicy {
    #[must_use]
    pub fn is_fake(&self, sentiment: &SentimentOutcome, corroboration: &Corroboration) -> bool {
        let strongly_negative = sentiment.label == SentimentLabel::Negative
            && sentiment.confidence() > self.negative_confidence;

        match corroboration {
            Corroboration::Measured { score, .. } => {
                score.value() < self.min_credibility || strongly_negative
            }
            Corroboration::Unavailable => strongly_negative,
        }
    }
}
