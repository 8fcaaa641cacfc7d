//! Configuration model loaded from external sources.

use config::Config;
use serde::Deserialize;
use thiserror::Error;

use crate::pagination::DEFAULT_PAGE_SIZE;

const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TEMPLATES_DIR: &str = "templates/**/*";
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors that abort startup before the server binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error loading settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("NEWS_API_KEY must be set")]
    MissingApiKey,

    #[error("page_size must be greater than zero")]
    ZeroPageSize,
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    pub news_api_url: String,
    #[serde(default)]
    pub news_api_key: String,
    pub page_size: usize,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            templates_dir: DEFAULT_TEMPLATES_DIR.to_string(),
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
            news_api_key: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Loads the configuration from the process environment.
    ///
    /// Sources, lowest priority first: built-in defaults, `config/default`,
    /// `config/{app_env}`, `APP_*` variables, then `PORT` and `NEWS_API_KEY`.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Self::load_with(app_env, |name| std::env::var(name).ok())
    }

    /// Same as [`ServerConfig::load`] with a custom lookup for the unprefixed
    /// `PORT` and `NEWS_API_KEY` variables.
    pub fn load_with<F>(app_env: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let settings = Config::builder()
            .set_default("address", DEFAULT_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("templates_dir", DEFAULT_TEMPLATES_DIR)?
            .set_default("assets_dir", DEFAULT_ASSETS_DIR)?
            .set_default("news_api_url", DEFAULT_NEWS_API_URL)?
            .set_default("page_size", DEFAULT_PAGE_SIZE as i64)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            // Add `./config/default.yaml`
            .add_source(config::File::with_name("config/default").required(false))
            // Add environment-specific overrides
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            // Add settings from the environment (with a prefix of APP)
            .add_source(config::Environment::with_prefix("APP"))
            .set_override_option("port", non_empty("PORT"))?
            .set_override_option("news_api_key", non_empty("NEWS_API_KEY"))?
            .build()?;

        let server_config = settings.try_deserialize::<ServerConfig>()?;
        server_config.validate()?;

        Ok(server_config)
    }

    /// Rejects settings the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.news_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
