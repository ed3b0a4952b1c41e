//! Session Entity
//!
//! One record of the identity provider's session store. Owned and written
//! by the identity provider; this layer only ever reads it, once per
//! request, because the embedded bearer token expires.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use uuid::Uuid;

/// Opaque credential bundle handed back by the session store
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4, assigned by the identity provider)
    pub session_id: Uuid,
    /// Reference to the user the session belongs to
    pub user_id: UserId,
    /// Bearer token forwarded to upstream domain services
    pub access_token: String,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}
