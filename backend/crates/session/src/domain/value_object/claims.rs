//! Token Claims
//!
//! Identity claims decoded from the bearer token's payload segment. The
//! token is issued and signature-verified by the identity provider; this
//! layer decodes and trusts it, it does not verify. A tampered token only
//! ever fails against the upstream services that do verify it.

use base64::Engine;
use kernel::context::UserRole;
use kernel::id::UserId;
use serde::Deserialize;

/// Identity claims carried by a bearer token
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: UserId,
    pub role: UserRole,
}

/// Wire shape of the token payload
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClaims {
    user_id: uuid::Uuid,
    role: String,
}

impl TokenClaims {
    /// Decode claims from a `header.payload.signature` token
    ///
    /// Any structural problem (wrong segment count, bad base64, missing or
    /// unknown claims) returns `None` so the caller can fail closed.
    pub fn decode(token: &str) -> Option<Self> {
        let mut segments = token.split('.');
        let _header = segments.next()?;
        let payload = segments.next()?;
        let _signature = segments.next()?;
        if segments.next().is_some() {
            return None;
        }

        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload)
            .ok()?;

        let raw: RawClaims = serde_json::from_slice(&payload).ok()?;
        let role = UserRole::from_code(&raw.role)?;

        Some(Self {
            user_id: UserId::from_uuid(raw.user_id),
            role,
        })
    }
}
