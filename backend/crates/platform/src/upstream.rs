//! Upstream Service Transport
//!
//! Thin typed HTTP adapter shared by every domain-service client. Each
//! upstream service gets its own instance with its own base address but
//! identical request/response handling: the bearer credential is attached to
//! every call, every call runs under a bounded timeout, and every failure is
//! normalized into a typed [`UpstreamError`]. Pure transport: no retries and
//! no cache side effects happen here.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;

/// Default bound on a single upstream call
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// The upstream domain services this gateway talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Schedule,
    Graduation,
}

impl Service {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Service::Schedule => "schedule",
            Service::Graduation => "graduation",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed upstream failure
///
/// Non-2xx statuses, timeouts, network failures, and malformed payloads are
/// all distinct outcomes; none of them escape as untyped errors.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Service answered with a non-2xx status
    #[error("{service} service returned status {status}")]
    Status { service: Service, status: u16 },

    /// Call exceeded the per-call timeout bound
    #[error("{service} service timed out")]
    Timeout { service: Service },

    /// Network-level failure reaching the service
    #[error("failed to reach {service} service: {message}")]
    Transport { service: Service, message: String },

    /// Response arrived but did not match the endpoint schema
    #[error("{service} service returned a malformed payload: {message}")]
    Payload { service: Service, message: String },
}

impl UpstreamError {
    pub const fn service(&self) -> Service {
        match self {
            UpstreamError::Status { service, .. }
            | UpstreamError::Timeout { service }
            | UpstreamError::Transport { service, .. }
            | UpstreamError::Payload { service, .. } => *service,
        }
    }
}

/// Build the shared HTTP connector with the per-call timeout bound
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// One upstream service endpoint
#[derive(Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    service: Service,
    base_url: String,
}

impl ServiceClient {
    pub fn new(http: reqwest::Client, service: Service, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http,
            service,
            base_url,
        }
    }

    #[inline]
    pub const fn service(&self) -> Service {
        self.service
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON payload from the service
    ///
    /// Attaches `Authorization: Bearer <token>`, validates the response
    /// against the endpoint schema `T` on receipt.
    pub async fn get_json<T>(
        &self,
        path: &str,
        bearer_token: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(bearer_token)
            .query(query)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                service = %self.service,
                path,
                status = status.as_u16(),
                "Upstream call rejected"
            );
            return Err(UpstreamError::Status {
                service: self.service,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| UpstreamError::Payload {
            service: self.service,
            message: e.to_string(),
        })
    }

    fn request_error(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout {
                service: self.service,
            }
        } else {
            UpstreamError::Transport {
                service: self.service,
                message: err.to_string(),
            }
        }
    }
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.service)
            .field("base_url", &self.base_url)
            .finish()
    }
}
