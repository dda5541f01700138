//! Listener configuration.

use anyhow::Context;
use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl AppConfig {
    /// Load config from environment variables.
    ///
    /// `BG_APP_HOST` and `BG_APP_PORT` override the defaults when set.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("BG_APP_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("BG_APP_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("BG_APP_PORT must be a valid u16, got {port:?}"))?;
        }
        Ok(config)
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
