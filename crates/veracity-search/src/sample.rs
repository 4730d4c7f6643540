//! Built-in trusted articles used to seed a fresh index.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// One document in the trusted-article index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustedArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    pub published_date: String,
    pub url: String,
}

struct SampleArticle {
    title: &'static str,
    content: &'static str,
    source: &'static str,
    url: &'static str,
}

const SAMPLES: [SampleArticle; 3] = [
    SampleArticle {
        title: "Ukraine war: Russia claims advances in eastern Ukraine",
        content: "Russian forces claim to have made advances in eastern Ukraine as intense \
                  fighting continues in the region. Ukrainian officials acknowledge challenging \
                  situations but maintain their defensive positions.",
        source: "BBC News",
        url: "https://www.bbc.com/news/world-europe-12345",
    },
    SampleArticle {
        title: "EU announces new aid package for Ukraine",
        content: "The European Union has announced a new comprehensive aid package for \
                  Ukraine, including military and humanitarian assistance. The package aims to \
                  support Ukraine's defense capabilities and civilian infrastructure.",
        source: "Reuters",
        url: "https://www.reuters.com/world/europe/12345",
    },
    SampleArticle {
        title: "UN calls for immediate ceasefire in Ukraine",
        content: "The United Nations Secretary-General has called for an immediate ceasefire \
                  in Ukraine, emphasizing the humanitarian crisis and the need for diplomatic \
                  solutions to the conflict.",
        source: "Associated Press",
        url: "https://apnews.com/article/12345",
    },
];

/// Index key for an article: lowercase hex SHA-256 of its URL.
///
/// Stable across runs, so reseeding merges instead of duplicating.
#[must_use]
pub fn document_id(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// The sample corpus, stamped with `published_at`.
#[must_use]
pub fn sample_articles(published_at: DateTime<Utc>) -> Vec<TrustedArticle> {
    let published_date = published_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    SAMPLES
        .iter()
        .map(|s| TrustedArticle {
            id: document_id(s.url),
            title: s.title.to_owned(),
            content: s.content.to_owned(),
            source: s.source.to_owned(),
            published_date: published_date.clone(),
            url: s.url.to_owned(),
        })
        .collect()
}
