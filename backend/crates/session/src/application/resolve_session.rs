//! Resolve Session Use Case
//!
//! Turns the opaque session cookie into an explicit [`RequestContext`].
//! Resolution runs once per request and the result is handed to downstream
//! components as an argument; nothing reads ambient session state.

use std::sync::Arc;

use kernel::context::RequestContext;

use crate::domain::repository::SessionStore;
use crate::domain::value_object::claims::TokenClaims;
use crate::error::{SessionError, SessionResult};

/// Resolve session use case
pub struct ResolveSessionUseCase<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    store: Arc<S>,
}

impl<S> ResolveSessionUseCase<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolve the session token into a request context
    ///
    /// Fails closed: a missing cookie, unknown or expired session, and
    /// incomplete claims all collapse into `Unauthenticated`. The session
    /// store is not consulted at all when no cookie was sent.
    pub async fn execute(&self, session_token: Option<&str>) -> SessionResult<RequestContext> {
        let token = session_token.ok_or(SessionError::Unauthenticated)?;

        let session = self
            .store
            .get_session(token)
            .await?
            .ok_or(SessionError::Unauthenticated)?;

        if session.is_expired() {
            tracing::debug!(session_id = %session.session_id, "Session expired");
            return Err(SessionError::Unauthenticated);
        }

        let claims =
            TokenClaims::decode(&session.access_token).ok_or(SessionError::Unauthenticated)?;

        Ok(RequestContext::new(
            session.access_token,
            claims.user_id,
            claims.role,
        ))
    }

    /// Resolve just the bearer credential for upstream calls
    pub async fn resolve_bearer_token(&self, session_token: Option<&str>) -> SessionResult<String> {
        let ctx = self.execute(session_token).await?;
        Ok(ctx.bearer_token().to_string())
    }

    /// Just check whether a session resolves (returns bool)
    pub async fn is_authenticated(&self, session_token: Option<&str>) -> bool {
        self.execute(session_token).await.is_ok()
    }
}
