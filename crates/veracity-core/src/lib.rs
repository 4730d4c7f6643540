//! Shared configuration and domain types for Veracity.
//!
//! Everything here is pure: no I/O beyond reading environment variables.
//! The credibility formula and the verdict policy live here so that the
//! pipeline, the server, and the CLI all agree on them.

pub mod app_config;
pub mod config;
pub mod credibility;
pub mod types;
pub mod verdict;

use thiserror::Error;

pub use app_config::{AppConfig, DatabaseConfig, Environment, LanguageConfig, SearchConfig};
pub use config::{
    load_app_config, load_app_config_from_env, load_database_config, load_log_level,
    load_search_config,
};
pub use credibility::{Corroboration, CredibilityScore, NEUTRAL_CREDIBILITY};
pub use types::{AnalysisResult, ConfidenceScores, SentimentLabel, SentimentOutcome};
pub use verdict::{VerdictPolicy, BASELINE_V1};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
