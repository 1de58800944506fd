mod app_config;
mod config;

pub use app_config::{AppConfig, Environment};
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_PLACES_BASE_URL, MAX_DETAIL_CONCURRENCY,
    MIN_PAGE_DELAY_MS,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
