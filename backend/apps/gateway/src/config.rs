//! Gateway Configuration
//!
//! Environment-driven configuration: required settings fail startup
//! loudly, optional ones fall back to development defaults.

use anyhow::Context;
use platform::upstream::DEFAULT_UPSTREAM_TIMEOUT;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Gateway process configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Identity provider's store (sessions + TA records), read-only
    pub database_url: String,
    /// Base address of the scheduling service
    pub schedule_api_url: String,
    /// Base address of the graduation service
    pub graduation_api_url: String,
    /// Bound on a single upstream call
    pub upstream_timeout: Duration,
    /// Listen address
    pub listen_addr: SocketAddr,
    /// Comma-separated CORS origins
    pub frontend_origins: String,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let schedule_api_url = env::var("SCHEDULE_API_URL")
            .unwrap_or_else(|_| "http://localhost:3041".to_string());
        let graduation_api_url = env::var("GRADUATION_API_URL")
            .unwrap_or_else(|_| "http://localhost:3042".to_string());

        let upstream_timeout = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT);

        let port = env::var("GATEWAY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(31180);
        let listen_addr = SocketAddr::from(([0, 0, 0, 0], port));

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:40930,http://127.0.0.1:40930".to_string());

        Ok(Self {
            database_url,
            schedule_api_url,
            graduation_api_url,
            upstream_timeout,
            listen_addr,
            frontend_origins,
        })
    }

    /// Parsed CORS origins, skipping anything unparsable
    pub fn allowed_origins(&self) -> Vec<axum::http::HeaderValue> {
        self.frontend_origins
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins_parsing() {
        let config = GatewayConfig {
            database_url: "postgres://localhost/identity".to_string(),
            schedule_api_url: "http://localhost:3041".to_string(),
            graduation_api_url: "http://localhost:3042".to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 31180)),
            frontend_origins: "http://localhost:40930, http://127.0.0.1:40930".to_string(),
        };

        let origins = config.allowed_origins();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:40930");
        assert_eq!(origins[1], "http://127.0.0.1:40930");
    }
}
