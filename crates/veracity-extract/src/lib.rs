//! Article text acquisition for Veracity.
//!
//! Fetches a page over HTTP and pulls the main article text out of the HTML:
//! structured JSON-LD first, then body paragraphs, then page metadata.

pub mod client;
pub mod error;
pub mod html;

pub use client::{parse_article_url, ArticleExtractor, DEFAULT_MAX_BODY_BYTES};
pub use error::ExtractError;
pub use html::extract_article_text;
