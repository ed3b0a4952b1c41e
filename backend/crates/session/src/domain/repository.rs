//! Repository Traits
//!
//! Interface to the identity provider's session store. This layer only
//! reads it; the implementation is in the infrastructure layer.

use crate::domain::entity::session::Session;
use crate::error::SessionResult;

/// Session store trait
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Find a session by its cookie token
    async fn get_session(&self, session_token: &str) -> SessionResult<Option<Session>>;
}
