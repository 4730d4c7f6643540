mod db;
mod history;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::SearchCommands;

#[derive(Debug, Parser)]
#[command(name = "veracity-cli")]
#[command(about = "Veracity provisioning and inspection tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Result store maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Trusted-article search index provisioning
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },
    /// Print the most recent analyses
    History {
        /// Number of analyses to show (defaults to VERACITY_HISTORY_LIMIT)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=1000))]
        limit: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Apply pending migrations (creates the `analysis_results` table)
    Migrate,
    /// Check database connectivity
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("veracity-cli: run with --help to list commands");
        return Ok(());
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(veracity_core::load_log_level()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Each command loads only the settings for the services it touches.
    match command {
        Commands::Db { command } => {
            let config = veracity_core::load_database_config()?;
            let pool = db::connect(&config).await?;
            match command {
                DbCommands::Migrate => db::run_db_migrate(&pool).await?,
                DbCommands::Ping => db::run_db_ping(&pool).await?,
            }
        }
        Commands::Search { command } => match command {
            SearchCommands::CreateIndex => {
                search::run_create_index(&veracity_core::load_search_config()?).await?;
            }
            SearchCommands::Seed { dry_run: true } => search::print_seed_preview(),
            SearchCommands::Seed { dry_run: false } => {
                search::run_seed(&veracity_core::load_search_config()?).await?;
            }
        },
        Commands::History { limit } => {
            let config = veracity_core::load_database_config()?;
            let pool = db::connect(&config).await?;
            history::run_history(&pool, limit.unwrap_or(config.history_limit)).await?;
        }
    }

    Ok(())
}
