mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use veracity_core::AppConfig;
use veracity_extract::ArticleExtractor;
use veracity_pipeline::{AnalysisPipeline, Collaborators, PgResultStore};
use veracity_search::SearchClient;
use veracity_sentiment::SentimentClient;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = veracity_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = veracity_db::PoolConfig::from_database_config(&config.database);
    let pool = veracity_db::connect_pool(&config.database.url, pool_config).await?;
    let applied = veracity_db::run_migrations(&pool).await?;
    tracing::info!(applied, "database migrations up to date");

    let store = Arc::new(PgResultStore::new(pool));
    let pipeline = build_pipeline(&config, Arc::clone(&store))?;

    let app = build_app(AppState {
        pipeline: Arc::new(pipeline),
        history: store,
        history_limit: config.database.history_limit,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "veracity-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn build_pipeline(config: &AppConfig, store: Arc<PgResultStore>) -> anyhow::Result<AnalysisPipeline> {
    let articles =
        ArticleExtractor::new(config.http_timeout_secs, &config.extractor_user_agent)?;
    let sentiment = SentimentClient::new(
        &config.language.endpoint,
        &config.language.key,
        config.language.timeout_secs,
    )?;
    let search = SearchClient::new(
        &config.search.endpoint,
        &config.search.key,
        &config.search.index,
        config.search.timeout_secs,
    )?;

    let pipeline = AnalysisPipeline::new(Collaborators {
        articles: Arc::new(articles),
        sentiment: Arc::new(sentiment),
        search: Arc::new(search),
        sink: store,
    })
    .with_search_top(config.search.top);

    tracing::info!(
        policy = pipeline.policy().version,
        search_index = %config.search.index,
        search_top = config.search.top,
        "analysis pipeline ready"
    );
    Ok(pipeline)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
