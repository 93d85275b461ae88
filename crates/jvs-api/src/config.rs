//! # Server Configuration
//!
//! Command-line flags with environment-variable fallbacks. Every setting has
//! a default, so the server starts with no configuration at all (in-memory
//! store, port 8082).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// JSON validation service: store JSON Schemas and validate payloads.
#[derive(Parser, Debug, Clone)]
#[command(name = "jvs-api", version, about, long_about = None)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "JVS_HTTP_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind the HTTP listener to.
    #[arg(long, env = "JVS_HTTP_PORT", default_value_t = 8082)]
    pub port: u16,

    /// PostgreSQL connection URL. Without it schemas are kept in memory.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool.
    #[arg(long, env = "JVS_DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub db_max_connections: u32,

    /// Per-request timeout in seconds.
    #[arg(long, env = "JVS_REQUEST_TIMEOUT_SECS", default_value_t = 15)]
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size in bytes.
    #[arg(long, env = "JVS_BODY_LIMIT_BYTES", default_value_t = 2 * 1024 * 1024)]
    pub body_limit_bytes: usize,

    /// Log filter directive (overridden by RUST_LOG when set).
    #[arg(long, env = "JVS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, env = "JVS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn limits(&self) -> RequestLimits {
        RequestLimits {
            body_limit_bytes: self.body_limit_bytes,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Log filter: `RUST_LOG` if set, otherwise the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}

/// Transport limits applied to every schema route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    pub body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            body_limit_bytes: 2 * 1024 * 1024,
            request_timeout: Duration::from_secs(15),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let config = AppConfig::try_parse_from(["jvs-api"]).unwrap();
        assert_eq!(config.port, 8082);
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.limits(), RequestLimits::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "jvs-api",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--database-url",
            "postgres://localhost/jvs",
            "--log-format",
            "json",
            "--request-timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/jvs"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.limits().request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(AppConfig::try_parse_from(["jvs-api", "--log-format", "xml"]).is_err());
    }
}
