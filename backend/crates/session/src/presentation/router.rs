//! Session Router

use crate::application::config::SessionConfig;
use crate::domain::repository::SessionStore;
use crate::infra::postgres::PgSessionStore;
use crate::presentation::handlers::{self, SessionAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the session router with the PostgreSQL store
pub fn session_router(store: PgSessionStore, config: SessionConfig) -> Router {
    session_router_generic(store, config)
}

/// Create a generic session router for any store implementation
pub fn session_router_generic<S>(store: S, config: SessionConfig) -> Router
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = SessionAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/status", get(handlers::session_status::<S>))
        .with_state(state)
}
