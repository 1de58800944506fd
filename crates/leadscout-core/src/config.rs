use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Production root of the Places Web Service.
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Shortest wait the text search endpoint accepts before a continuation token is valid.
pub const MIN_PAGE_DELAY_MS: u64 = 2_000;

/// Upper bound on detail lookups in flight at once.
pub const MAX_DETAIL_CONCURRENCY: usize = 5;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("LEADSCOUT_ENV", "development"))?;

    let bind_addr = or_default("LEADSCOUT_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("LEADSCOUT_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "info");

    let places_api_key = lookup("GOOGLE_PLACES_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    let places_base_url = or_default("LEADSCOUT_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);

    let request_timeout_secs = parse_u64("LEADSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LEADSCOUT_USER_AGENT", "leadscout/0.1 (business-search)");
    let page_delay_ms = parse_u64("LEADSCOUT_PAGE_DELAY_MS", "2000")?;
    if page_delay_ms < MIN_PAGE_DELAY_MS {
        return Err(invalid(
            "LEADSCOUT_PAGE_DELAY_MS",
            format!("must be at least {MIN_PAGE_DELAY_MS}"),
        ));
    }

    let detail_concurrency = or_default("LEADSCOUT_DETAIL_CONCURRENCY", "5")
        .parse::<usize>()
        .map_err(|e| invalid("LEADSCOUT_DETAIL_CONCURRENCY", e.to_string()))?;
    if !(1..=MAX_DETAIL_CONCURRENCY).contains(&detail_concurrency) {
        return Err(invalid(
            "LEADSCOUT_DETAIL_CONCURRENCY",
            format!("must be between 1 and {MAX_DETAIL_CONCURRENCY}"),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        places_api_key,
        places_base_url,
        request_timeout_secs,
        user_agent,
        page_delay_ms,
        detail_concurrency,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LEADSCOUT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
