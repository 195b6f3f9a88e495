use axum::http::{HeaderValue, Method, header};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// CORS layer restricted to the given origins.
///
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - Max age: 1 hour
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// CORS layer that allows any origin, method and header.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Picks the CORS layer described by `config`.
///
/// Returns `Ok(None)` when CORS is disabled. An empty origin list yields the
/// permissive layer.
///
/// # Errors
/// Fails when an origin is not a valid header value.
pub fn cors_layer_from_config(config: &ServerConfig) -> io::Result<Option<CorsLayer>> {
    if !config.enable_cors {
        return Ok(None);
    }

    if config.cors_allowed_origins.is_empty() {
        info!("CORS enabled for any origin");
        return Ok(Some(create_permissive_cors_layer()));
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(origins = ?config.cors_allowed_origins, "CORS enabled for listed origins");
    Ok(Some(create_cors_layer(origins)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cors_yields_no_layer() {
        let config = ServerConfig {
            enable_cors: false,
            ..ServerConfig::default()
        };
        assert!(cors_layer_from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_enabled_cors_without_origins_is_permissive() {
        assert!(cors_layer_from_config(&ServerConfig::default()).unwrap().is_some());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let config = ServerConfig {
            cors_allowed_origins: vec!["bad\norigin".to_string()],
            ..ServerConfig::default()
        };
        let err = cors_layer_from_config(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
