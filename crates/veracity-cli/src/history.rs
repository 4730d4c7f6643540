//! `history` command handler.

/// Longest text excerpt printed per row.
const EXCERPT_CHARS: usize = 48;

fn excerpt(text: &str) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= EXCERPT_CHARS {
        return single_line;
    }
    let cut: String = single_line.chars().take(EXCERPT_CHARS - 3).collect();
    format!("{cut}...")
}

/// Print the most recent analyses, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) async fn run_history(pool: &sqlx::PgPool, limit: i64) -> anyhow::Result<()> {
    let results = veracity_db::list_recent_analysis_results(pool, limit).await?;

    if results.is_empty() {
        println!("no analyses recorded yet");
        return Ok(());
    }

    println!(
        "{:<18}{:<10}{:<8}{:<7}{:<6}TEXT",
        "ANALYZED", "SENTIMENT", "CONF", "CRED", "FAKE"
    );
    for result in &results {
        let analyzed = result.analyzed_at.format("%Y-%m-%d %H:%M").to_string();
        let cred = if result.corroboration_degraded {
            format!("{:.1}*", result.credibility_score)
        } else {
            format!("{:.1}", result.credibility_score)
        };
        println!(
            "{:<18}{:<10}{:<8.2}{:<7}{:<6}{}",
            analyzed,
            result.sentiment,
            result.confidence,
            cred,
            if result.is_fake { "yes" } else { "no" },
            result
                .source_url
                .as_deref()
                .map_or_else(|| excerpt(&result.text), str::to_owned)
        );
    }

    if results.iter().any(|r| r.corroboration_degraded) {
        println!("* search unavailable at analysis time; neutral credibility used");
    }

    Ok(())
}
