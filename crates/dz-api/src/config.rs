//! API server configuration.

use serde::Deserialize;

use crate::chat::ChatConfig;
use crate::predictors::ModelConfig;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "DIAGNOZE_CONFIG";

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Chat provider credentials and endpoints.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Structured predictor endpoints.
    #[serde(default)]
    pub models: ModelConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            host: var("HOST").unwrap_or_else(default_host),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            cors_origins: var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            chat: ChatConfig::from_env(),
            models: ModelConfig::from_env(),
        }
    }

    /// Load config from a TOML file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// File named by `DIAGNOZE_CONFIG` if set, otherwise the environment.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.is_empty() => {
                tracing::info!(path = %path, "loading config file");
                Self::from_file(&path)
            }
            _ => Ok(Self::from_env()),
        }
    }

    /// `host:port` listen address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            chat: ChatConfig::default(),
            models: ModelConfig::default(),
        }
    }
}
