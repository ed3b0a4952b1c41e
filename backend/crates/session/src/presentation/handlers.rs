//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use platform::cookie::extract_cookie;
use std::sync::Arc;

use crate::application::ResolveSessionUseCase;
use crate::application::config::SessionConfig;
use crate::domain::repository::SessionStore;
use crate::presentation::dto::SessionStatusResponse;

/// Shared state for session handlers
#[derive(Clone)]
pub struct SessionAppState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<SessionConfig>,
}

/// GET /api/session/status
///
/// Probe used by rendering surfaces to gate whole page groups. Never
/// errors: a store failure reads as "not authenticated".
pub async fn session_status<S>(
    State(state): State<SessionAppState<S>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = ResolveSessionUseCase::new(state.store.clone());

    match use_case.execute(token.as_deref()).await {
        Ok(ctx) => Json(SessionStatusResponse {
            authenticated: true,
            user_id: Some(ctx.user_id.to_string()),
            role: Some(ctx.role.code().to_string()),
        }),
        Err(_) => Json(SessionStatusResponse {
            authenticated: false,
            user_id: None,
            role: None,
        }),
    }
}
