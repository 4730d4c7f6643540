use std::env::VarError;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::app_config::{AppConfig, DatabaseConfig, Environment, LanguageConfig, SearchConfig};
use crate::ConfigError;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Load the full server configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load the full server configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load only the result store settings. Requires `DATABASE_URL`.
///
/// # Errors
///
/// Returns `ConfigError` if `DATABASE_URL` is missing or a value is invalid.
pub fn load_database_config() -> Result<DatabaseConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_database_config(&EnvReader(|key: &str| std::env::var(key)))
}

/// Load only the search service settings. Requires the `AZURE_SEARCH_*` variables.
///
/// # Errors
///
/// Returns `ConfigError` if the search credentials are missing or a value is invalid.
pub fn load_search_config() -> Result<SearchConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_search_config(&EnvReader(|key: &str| std::env::var(key)))
}

/// `VERACITY_LOG_LEVEL`, or `info` when unset.
#[must_use]
pub fn load_log_level() -> String {
    dotenvy::dotenv().ok();
    std::env::var("VERACITY_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

/// Env-var lookup shared by the section builders.
///
/// Wraps a lookup function so tests can drive it with a plain `HashMap`.
struct EnvReader<F>(F);

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    fn require(&self, var: &str) -> Result<String, ConfigError> {
        (self.0)(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    }

    fn or_default(&self, var: &str, default: &str) -> String {
        (self.0)(var).unwrap_or_else(|_| default.to_string())
    }

    fn parse<T>(&self, var: &str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.or_default(var, default)
            .parse::<T>()
            .map_err(|e| invalid(var, e.to_string()))
    }

    fn at_least_one<T>(&self, var: &str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr + PartialOrd + From<u8>,
        T::Err: std::fmt::Display,
    {
        let value = self.parse::<T>(var, default)?;
        if value < T::from(1) {
            return Err(invalid(var, "must be at least 1".to_string()));
        }
        Ok(value)
    }

    fn http_timeout_secs(&self) -> Result<u64, ConfigError> {
        self.parse("VERACITY_HTTP_TIMEOUT_SECS", "30")
    }
}

fn invalid(var: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    }
}

fn build_database_config<F>(env: &EnvReader<F>) -> Result<DatabaseConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    Ok(DatabaseConfig {
        url: env.require("DATABASE_URL")?,
        max_connections: env.parse("VERACITY_DB_MAX_CONNECTIONS", "10")?,
        min_connections: env.parse("VERACITY_DB_MIN_CONNECTIONS", "1")?,
        acquire_timeout_secs: env.parse("VERACITY_DB_ACQUIRE_TIMEOUT_SECS", "10")?,
        history_limit: env.at_least_one("VERACITY_HISTORY_LIMIT", "10")?,
    })
}

fn build_language_config<F>(env: &EnvReader<F>) -> Result<LanguageConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    Ok(LanguageConfig {
        endpoint: env.require("AZURE_LANGUAGE_ENDPOINT")?,
        key: env.require("AZURE_LANGUAGE_KEY")?,
        timeout_secs: env.http_timeout_secs()?,
    })
}

fn build_search_config<F>(env: &EnvReader<F>) -> Result<SearchConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    Ok(SearchConfig {
        endpoint: env.require("AZURE_SEARCH_ENDPOINT")?,
        key: env.require("AZURE_SEARCH_KEY")?,
        index: env.or_default("VERACITY_SEARCH_INDEX", "news-index"),
        top: env.at_least_one("VERACITY_SEARCH_TOP", "5")?,
        timeout_secs: env.http_timeout_secs()?,
    })
}

/// Build the full configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let env = EnvReader(lookup);

    let database = build_database_config(&env)?;
    let environment = parse_environment(&env.or_default("VERACITY_ENV", "development"))?;
    let bind_addr = env.parse::<SocketAddr>("VERACITY_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = env.or_default("VERACITY_LOG_LEVEL", DEFAULT_LOG_LEVEL);
    let language = build_language_config(&env)?;
    let search = build_search_config(&env)?;
    let http_timeout_secs = env.http_timeout_secs()?;
    let extractor_user_agent = env.or_default(
        "VERACITY_EXTRACTOR_USER_AGENT",
        "veracity/0.1 (article-extractor)",
    );

    Ok(AppConfig {
        env: environment,
        bind_addr,
        log_level,
        http_timeout_secs,
        extractor_user_agent,
        database,
        language,
        search,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VERACITY_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
