//! Credibility derived from corroborating search hits.

/// Credibility assumed when the search service is unavailable.
pub const NEUTRAL_CREDIBILITY: f64 = 0.5;

/// Hits beyond this count add nothing; five hits already yield full credibility.
pub const MAX_COUNTED_MATCHES: usize = 5;

/// Credibility in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CredibilityScore(f64);

impl CredibilityScore {
    /// Wraps a raw value, clamping it into `[0.0, 1.0]`. NaN becomes `0.0`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// `min(1.0, matches * 0.2)`.
    ///
    /// Computed as `matches / 5` so each step lands exactly on a multiple
    /// of 0.2 instead of accumulating float error.
    #[must_use]
    pub fn from_match_count(matches: usize) -> Self {
        let counted = u32::try_from(matches.min(MAX_COUNTED_MATCHES)).unwrap_or(5);
        Self(f64::from(counted) / 5.0)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Outcome of the corroboration stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Corroboration {
    /// The search service answered.
    Measured {
        matches: usize,
        score: CredibilityScore,
    },
    /// The search service failed; credibility falls back to [`NEUTRAL_CREDIBILITY`].
    Unavailable,
}

impl Corroboration {
    #[must_use]
    pub fn from_matches(matches: usize) -> Self {
        Corroboration::Measured {
            matches,
            score: CredibilityScore::from_match_count(matches),
        }
    }

    /// Credibility value reported to callers.
    #[must_use]
    pub fn credibility(&self) -> f64 {
        match self {
            Corroboration::Measured { score, .. } => score.value(),
            Corroboration::Unavailable => NEUTRAL_CREDIBILITY,
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Corroboration::Unavailable)
    }
}
