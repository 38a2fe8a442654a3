use std::net::SocketAddr;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Listen address override (e.g. "0.0.0.0:8080"). Falls back to the
    /// Leptos `site-addr` when unset.
    pub listen: Option<String>,

    /// Serve on this Unix socket instead of TCP
    pub socket: Option<String>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

/// Where the server accepts connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindTarget {
    Unix(String),
    Tcp(SocketAddr),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:4318".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - PORTFOLIO_LISTEN
    /// - PORTFOLIO_SOCKET
    /// - PORTFOLIO_OTEL_ENDPOINT
    /// - PORTFOLIO_OTEL_ENVIRONMENT
    pub fn load() -> Result<Self, AppError> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("PORTFOLIO_").split("_"))
            .extract()?;

        Ok(config)
    }

    /// Socket path if one is configured, otherwise the TCP address. The
    /// listen override is only parsed when it is actually used.
    pub fn bind_target(&self, site_addr: SocketAddr) -> Result<BindTarget, AppError> {
        match &self.socket {
            Some(path) => Ok(BindTarget::Unix(path.clone())),
            None => self.listen_addr(site_addr).map(BindTarget::Tcp),
        }
    }

    /// Address to bind, preferring the explicit override.
    pub fn listen_addr(&self, site_addr: SocketAddr) -> Result<SocketAddr, AppError> {
        match &self.listen {
            Some(listen) => listen
                .parse()
                .map_err(|source| AppError::ListenAddr {
                    addr: listen.clone(),
                    source,
                }),
            None => Ok(site_addr),
        }
    }
}
