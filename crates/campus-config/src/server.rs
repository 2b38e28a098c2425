use std::env;

use crate::env_or;

/// HTTP listener and observability settings.
///
/// # Environment Variables
///
/// - `SERVER_HOST`: Bind address (default: `0.0.0.0`)
/// - `SERVER_PORT`: API port (default: `3000`)
/// - `METRICS_PORT`: Prometheus scrape port (default: `9090`)
/// - `OBSERVABILITY_ENABLED`: `false` or `0` disables metrics (default: enabled)
/// - `LOG_DIR`: Directory for rolling log files (default: `storage/logs`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub observability_enabled: bool,
    pub log_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            metrics_port: 9090,
            observability_enabled: true,
            log_dir: "storage/logs".to_string(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env_or("SERVER_PORT", defaults.port),
            metrics_port: env_or("METRICS_PORT", defaults.metrics_port),
            observability_enabled: env::var("OBSERVABILITY_ENABLED")
                .map(|v| parse_enabled(&v))
                .unwrap_or(defaults.observability_enabled),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_addr(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}

fn parse_enabled(value: &str) -> bool {
    value.to_lowercase() != "false" && value != "0"
}
