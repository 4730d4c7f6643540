//! `db` command handlers.

use veracity_core::DatabaseConfig;

pub(crate) async fn connect(config: &DatabaseConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool_config = veracity_db::PoolConfig::from_database_config(config);
    let pool = veracity_db::connect_pool(&config.url, pool_config).await?;
    Ok(pool)
}

/// Apply all pending migrations and report how many ran.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub(crate) async fn run_db_migrate(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let applied = veracity_db::run_migrations(pool).await?;
    if applied == 0 {
        println!("database schema is up to date");
    } else {
        println!("applied {applied} migration(s)");
    }
    Ok(())
}

/// Verify the database answers a trivial query.
///
/// # Errors
///
/// Returns an error if the health check fails.
pub(crate) async fn run_db_ping(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    veracity_db::health_check(pool).await?;
    println!("database ok");
    Ok(())
}
