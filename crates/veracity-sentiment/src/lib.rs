//! Sentiment scoring for Veracity.
//!
//! Thin client over the Azure AI Language `analyze-text` endpoint. Returns a
//! document-level label plus per-class confidence scores. There is no local
//! fallback model: a failure here fails the analysis.

pub mod client;
pub mod error;

mod wire;

pub use client::{SentimentClient, MAX_DOCUMENT_CHARS};
pub use error::SentimentError;
