//! Session Middleware
//!
//! Middleware that resolves the session cookie into a [`RequestContext`]
//! before any protected handler runs. Handlers receive the context through
//! request extensions; requests without a resolvable session are answered
//! with an access-denied response before a single upstream call is made.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::ResolveSessionUseCase;
use crate::application::config::SessionConfig;
use crate::domain::repository::SessionStore;
use crate::error::SessionError;

/// Middleware state
#[derive(Clone)]
pub struct SessionMiddlewareState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<SessionConfig>,
}

/// Middleware that requires a resolvable session
pub async fn require_session<S>(
    state: SessionMiddlewareState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = ResolveSessionUseCase::new(state.store.clone());

    match use_case.execute(token.as_deref()).await {
        Ok(ctx) => {
            req.extensions_mut().insert(ctx);
            Ok(next.run(req).await)
        }
        Err(SessionError::Unauthenticated) => Err((
            StatusCode::UNAUTHORIZED,
            [("X-Auth-Required", "true")],
        )
            .into_response()),
        Err(e) => Err(e.into_response()),
    }
}
