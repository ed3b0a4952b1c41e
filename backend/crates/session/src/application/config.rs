//! Application Configuration
//!
//! Configuration for the session application layer.

/// Session application configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the cookie holding the identity provider's session token
    pub session_cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "portal_session".to_string(),
        }
    }
}
