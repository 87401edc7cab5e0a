use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required API key: {0}")]
    MissingApiKey(String),
}

/// Environment variables consulted for the oracle credential, in order.
const API_KEY_ENV_VARS: [&str; 2] = ["CADASTRE_ORACLE_API_KEY", "ALPHAVANTAGE_API_KEY"];

const DEFAULT_ENDPOINT: &str = "https://www.alphavantage.co/query";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the exchange-rate oracle.
///
/// Every field is optional in the YAML file; accessors fill in the
/// defaults, which point at the public Alpha Vantage endpoint quoting
/// bitcoin in US dollars.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OracleConfig {
    /// Endpoint of the currency-exchange API
    pub endpoint: Option<String>,

    /// Access credential; environment variables are consulted when unset
    pub api_key: Option<String>,

    /// Base currency of the quote
    pub from_currency: Option<String>,

    /// Quote currency
    pub to_currency: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl OracleConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: OracleConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn from_currency(&self) -> &str {
        self.from_currency.as_deref().unwrap_or("BTC")
    }

    pub fn to_currency(&self) -> &str {
        self.to_currency.as_deref().unwrap_or("USD")
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Get the API key, checking environment variables if not in config
    pub fn get_api_key(&self) -> Result<String, ConfigError> {
        use log::{debug, info};

        // First check if we have the API key in the config
        if let Some(api_key) = &self.api_key {
            debug!("Using oracle API key from config");
            return Ok(api_key.clone());
        }

        for env_var in API_KEY_ENV_VARS {
            match std::env::var(env_var) {
                Ok(key) => {
                    info!("Using oracle API key from {}", env_var);
                    return Ok(key);
                }
                Err(_) => {
                    debug!("{} not set", env_var);
                }
            }
        }

        Err(ConfigError::MissingApiKey(format!(
            "no key in config and none of {} set",
            API_KEY_ENV_VARS.join(", ")
        )))
    }
}

/// Default configuration
impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            endpoint: None,
            api_key: None,
            from_currency: None,
            to_currency: None,
            timeout_secs: None,
        }
    }
}
