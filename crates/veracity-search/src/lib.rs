//! Azure AI Search client for Veracity.
//!
//! Covers the corroboration query used at analysis time and the provisioning
//! calls (index schema, document upload) used by the CLI.

pub mod client;
pub mod error;
pub mod sample;
pub mod schema;

pub use client::{SearchClient, SearchHit, UploadSummary};
pub use error::SearchError;
pub use sample::{document_id, sample_articles, TrustedArticle};
pub use schema::index_definition;
