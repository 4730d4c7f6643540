//! `search` command handlers: index schema and sample corpus.

use chrono::Utc;
use clap::Subcommand;
use veracity_core::SearchConfig;
use veracity_search::{sample_articles, SearchClient};

/// Sub-commands available under `search`.
#[derive(Debug, Subcommand)]
pub enum SearchCommands {
    /// Create the trusted-article index, or update its schema in place
    CreateIndex,
    /// Upload the built-in sample trusted articles
    Seed {
        /// Print the documents without uploading them
        #[arg(long)]
        dry_run: bool,
    },
}

fn client(config: &SearchConfig) -> anyhow::Result<SearchClient> {
    Ok(SearchClient::new(
        &config.endpoint,
        &config.key,
        &config.index,
        config.timeout_secs,
    )?)
}

/// Create or update the configured index.
///
/// # Errors
///
/// Returns an error if the search service rejects the index definition.
pub(crate) async fn run_create_index(config: &SearchConfig) -> anyhow::Result<()> {
    let client = client(config)?;
    client.create_or_update_index().await?;
    println!("index {} created or updated", client.index_name());
    Ok(())
}

/// Print the sample corpus without contacting the search service.
pub(crate) fn print_seed_preview() {
    let articles = sample_articles(Utc::now());
    println!("[dry run] would upload {} article(s):", articles.len());
    for article in &articles {
        println!("  {:<18}{}  {}", article.source, &article.id[..12], article.title);
    }
}

/// Upload the sample corpus with `mergeOrUpload`.
///
/// Document keys are derived from article URLs, so running this twice leaves
/// three documents, not six.
///
/// # Errors
///
/// Returns an error if the upload request fails or any document is rejected.
pub(crate) async fn run_seed(config: &SearchConfig) -> anyhow::Result<()> {
    let articles = sample_articles(Utc::now());
    let client = client(config)?;
    let summary = client.upload_documents(&articles).await?;
    tracing::info!(
        index = %client.index_name(),
        succeeded = summary.succeeded,
        "sample articles uploaded"
    );
    println!(
        "added {} article(s) to {}",
        summary.succeeded,
        client.index_name()
    );
    Ok(())
}
