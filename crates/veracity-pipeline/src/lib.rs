//! Credibility assessment pipeline.
//!
//! Chains text acquisition, sentiment scoring, corroboration scoring and the
//! verdict policy for one request, then hands the result to a
//! [`ResultSink`]. Every external service sits behind a trait so the server
//! can inject real clients and tests can inject doubles.

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod traits;

pub use adapters::PgResultStore;
pub use error::PipelineError;
pub use pipeline::{AnalysisPipeline, Collaborators, DEFAULT_SEARCH_TOP};
pub use request::{AnalysisInput, AnalysisRequest};
pub use traits::{
    ArticleSource, CorroborationSearch, HistorySource, PersistOutcome, ResultSink,
    SentimentAnalyzer,
};
