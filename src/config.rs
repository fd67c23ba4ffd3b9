//! Application configuration loaded from environment variables.

use std::env;

/// Default upstream request timeout.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 20;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream webhook serving refuel records (GET list, POST create)
    pub fuel_webhook_url: String,
    /// Upstream webhook serving the vehicle list
    pub vehicles_webhook_url: String,
    /// Service token sent to the upstream store
    pub webhook_token: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Upstream request timeout (seconds)
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Config for tests, pointing at a local stub upstream.
    pub fn test_default() -> Self {
        Self {
            fuel_webhook_url: "http://127.0.0.1:9/webhook/fuel".to_string(),
            vehicles_webhook_url: "http://127.0.0.1:9/webhook/fuel-vhid".to_string(),
            webhook_token: "test_webhook_token".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            upstream_timeout_secs: 2,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let fuel_webhook_url =
            env::var("N8N_WEBHOOK_URL").map_err(|_| ConfigError::Missing("N8N_WEBHOOK_URL"))?;
        let vehicles_webhook_url = env::var("N8N_VEHICLES_WEBHOOK_URL")
            .unwrap_or_else(|_| derive_vehicles_url(&fuel_webhook_url));

        Ok(Self {
            vehicles_webhook_url,
            fuel_webhook_url,
            webhook_token: env::var("N8N_WEBHOOK_TOKEN")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("N8N_WEBHOOK_TOKEN"))?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_var("PORT", 8080)?,
            upstream_timeout_secs: parse_var(
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?,
        })
    }
}

/// Vehicle webhook sits next to the fuel webhook (`.../fuel` -> `.../fuel-vhid`).
fn derive_vehicles_url(fuel_url: &str) -> String {
    match fuel_url.strip_suffix("/fuel") {
        Some(base) => format!("{}/fuel-vhid", base),
        None => fuel_url.to_string(),
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
