//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::models::LanguageCode;

/// Public JSON-RPC endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www2.deepl.com/jsonrpc";

/// Request identifier sent with every call
pub const DEFAULT_REQUEST_ID: u64 = 29510025;

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// JSON-RPC endpoint URL
    pub endpoint: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    /// Identifier sent in every request
    pub request_id: u64,
    /// Preference hint sent in every request
    pub user_preferred_langs: Vec<LanguageCode>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: None,
            request_id: DEFAULT_REQUEST_ID,
            user_preferred_langs: vec![LanguageCode::En, LanguageCode::Ja],
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("DEEPL_ENDPOINT") {
            info!("Using endpoint from DEEPL_ENDPOINT: {}", endpoint);
            config.endpoint = endpoint;
        }

        if let Ok(timeout) = std::env::var("DEEPL_TIMEOUT_MS") {
            config.timeout_ms = Some(timeout.parse::<u64>()?);
        }

        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.is_empty() {
            return Err(anyhow::anyhow!("Endpoint is required"));
        }

        let url = url::Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "Endpoint must use http or https, got {}",
                url.scheme()
            ));
        }

        if self.timeout_ms == Some(0) {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }
}
