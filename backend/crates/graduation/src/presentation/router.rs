//! Graduation Router

use crate::domain::gateway::GraduationGateway;
use crate::domain::repository::TaRegistry;
use crate::infra::http::HttpGraduationGateway;
use crate::infra::postgres::PgTaRegistry;
use crate::presentation::handlers::{self, GraduationAppState};
use axum::{Router, routing::get};
use platform::cache::CacheTagRegistry;
use std::sync::Arc;

/// Create the graduation router with the Postgres role gate and HTTP
/// gateway
pub fn graduation_router(
    registry: PgTaRegistry,
    gateway: HttpGraduationGateway,
    cache: Arc<CacheTagRegistry>,
) -> Router {
    graduation_router_generic(registry, gateway, cache)
}

/// Create a generic graduation router for any implementations
pub fn graduation_router_generic<R, G>(
    registry: R,
    gateway: G,
    cache: Arc<CacheTagRegistry>,
) -> Router
where
    R: TaRegistry + Clone + Send + Sync + 'static,
    G: GraduationGateway + Clone + Send + Sync + 'static,
{
    let state = GraduationAppState {
        registry: Arc::new(registry),
        gateway: Arc::new(gateway),
        cache,
    };

    Router::new()
        .route("/overview", get(handlers::graduation_overview::<R, G>))
        .with_state(state)
}
