//! Schedule Router

use crate::domain::gateway::ScheduleGateway;
use crate::infra::http::HttpScheduleGateway;
use crate::presentation::handlers::{self, ScheduleAppState};
use axum::{Router, routing::get};
use platform::cache::CacheTagRegistry;
use std::sync::Arc;

/// Create the schedule router with the HTTP gateway
pub fn schedule_router(gateway: HttpScheduleGateway, cache: Arc<CacheTagRegistry>) -> Router {
    schedule_router_generic(gateway, cache)
}

/// Create a generic schedule router for any gateway implementation
pub fn schedule_router_generic<G>(gateway: G, cache: Arc<CacheTagRegistry>) -> Router
where
    G: ScheduleGateway + Clone + Send + Sync + 'static,
{
    let state = ScheduleAppState {
        gateway: Arc::new(gateway),
        cache,
    };

    Router::new()
        .route("/me", get(handlers::list_my_teachings::<G>))
        .with_state(state)
}
