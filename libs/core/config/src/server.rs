use crate::{env_flag, env_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// HTTP listener and cross-cutting middleware switches.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Attach a CORS layer to the router.
    pub enable_cors: bool,
    /// Explicit CORS origins. Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    /// Attach the HTTP request/response trace layer.
    pub enable_request_logging: bool,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            ..Self::default()
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to 0.0.0.0 (all interfaces)
    /// - PORT: defaults to 3000
    /// - CORS_ENABLED / REQUEST_LOGGING_ENABLED: default to true
    /// - CORS_ALLOWED_ORIGIN: comma-separated origins, unset allows any
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "3000").parse().map_err(|e| {
            ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            }
        })?;

        let cors_allowed_origins = env_or_default("CORS_ALLOWED_ORIGIN", "")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host,
            port,
            enable_cors: env_flag("CORS_ENABLED", true)?,
            cors_allowed_origins,
            enable_request_logging: env_flag("REQUEST_LOGGING_ENABLED", true)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 3000,
            enable_cors: true,
            cors_allowed_origins: Vec::new(),
            enable_request_logging: true,
        }
    }
}
