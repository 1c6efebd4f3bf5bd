use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR_PREFIX: &str = "sbanken";

const DEFAULT_AUTH_URL: &str = "https://auth.sbanken.no";
const TOKEN_PATH: &str = "/identityserver/connect/token";

const LEGACY_BANK_BASE_URL: &str = "https://api.sbanken.no/exec.bank/api";
const LEGACY_CUSTOMERS_BASE_URL: &str = "https://api.sbanken.no/exec.customers/api";
const CURRENT_BASE_URL: &str = "https://publicapi.sbanken.no/apibeta/api";

/// Which generation of the API the client talks to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiSurface {
    /// Identifies the caller with a `customerId` header.
    Legacy,
    /// Identifies the caller with a `User-Agent` header.
    #[default]
    Current,
}

/// How requests identify the calling customer or application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    CustomerId(String),
    UserAgent(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Overrides the default `sbanken/<version>` user agent.
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub surface: ApiSurface,
    #[serde(default)]
    pub auth_url: Option<String>,
    #[serde(default)]
    pub bank_base_url: Option<String>,
    #[serde(default)]
    pub customers_base_url: Option<String>,
}

impl Config {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.client_id.is_empty() {
            return Err(ConfigError::MissingClientId);
        }

        if self.client_secret.is_empty() {
            return Err(ConfigError::MissingClientSecret);
        }

        if self.surface == ApiSurface::Legacy && self.customer_id().is_none() {
            return Err(ConfigError::MissingCustomerId);
        }

        Ok(())
    }

    /// Customer ID, treating an empty string as unset.
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn auth_url(&self) -> String {
        self.auth_url
            .as_deref()
            .unwrap_or(DEFAULT_AUTH_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.auth_url(), TOKEN_PATH)
    }

    pub fn bank_base_url(&self) -> String {
        match (&self.bank_base_url, self.surface) {
            (Some(url), _) => url.trim_end_matches('/').to_string(),
            (None, ApiSurface::Legacy) => LEGACY_BANK_BASE_URL.to_string(),
            (None, ApiSurface::Current) => CURRENT_BASE_URL.to_string(),
        }
    }

    pub fn customers_base_url(&self) -> String {
        match (&self.customers_base_url, self.surface) {
            (Some(url), _) => url.trim_end_matches('/').to_string(),
            (None, ApiSurface::Legacy) => LEGACY_CUSTOMERS_BASE_URL.to_string(),
            (None, ApiSurface::Current) => CURRENT_BASE_URL.to_string(),
        }
    }

    pub fn identity(&self) -> Identity {
        match self.surface {
            ApiSurface::Legacy => {
                Identity::CustomerId(self.customer_id().unwrap_or_default().to_string())
            }
            ApiSurface::Current => Identity::UserAgent(
                self.user_agent
                    .clone()
                    .filter(|ua| !ua.is_empty())
                    .unwrap_or_else(default_user_agent),
            ),
        }
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_file()?;

        if !config_path.exists() {
            return Err(ConfigError::File(format!(
                "Config file not found at {:?}. Please create one.",
                config_path
            ))
            .into());
        }

        let contents = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::File(format!("Failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::File(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        let xdg_dirs = Self::xdg_dirs();
        let path = xdg_dirs
            .place_config_file("config.toml")
            .map_err(|e| ConfigError::File(format!("Failed to create config directory: {}", e)))?;
        Ok(path)
    }
}

pub fn default_user_agent() -> String {
    let repository = env!("CARGO_PKG_REPOSITORY");
    match repository.is_empty() {
        true => format!("sbanken/{}", env!("CARGO_PKG_VERSION")),
        false => format!("sbanken/{} ({})", env!("CARGO_PKG_VERSION"), repository),
    }
}
