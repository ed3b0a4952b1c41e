//! Gateway Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use graduation::{HttpGraduationGateway, PgTaRegistry, graduation_router};
use platform::cache::CacheTagRegistry;
use platform::upstream::{Service, ServiceClient, build_http_client};
use schedule::{HttpScheduleGateway, schedule_router};
use session::middleware::{SessionMiddlewareState, require_session};
use session::{PgSessionStore, SessionConfig, session_router};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
use config::GatewayConfig;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "gateway=info,session=info,schedule=info,graduation=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env()?;

    // Read-only pool against the identity provider's store. Its schema is
    // owned by the identity provider, so no migrations run here.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to identity store");

    // Upstream clients share one connector; every call is bounded by the
    // configured timeout.
    let http_client = build_http_client(config.upstream_timeout)?;
    let schedule_client = ServiceClient::new(
        http_client.clone(),
        Service::Schedule,
        config.schedule_api_url.clone(),
    );
    let graduation_client = ServiceClient::new(
        http_client,
        Service::Graduation,
        config.graduation_api_url.clone(),
    );

    let cache = Arc::new(CacheTagRegistry::new());

    let session_store = PgSessionStore::new(pool.clone());
    let session_config = SessionConfig::default();

    let session_state = SessionMiddlewareState {
        store: Arc::new(session_store.clone()),
        config: Arc::new(session_config.clone()),
    };

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config.allowed_origins();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
        ]))
        .allow_credentials(true);

    // Protected view routes resolve the session before any upstream call
    let protected = Router::new()
        .nest(
            "/api/teachings",
            schedule_router(HttpScheduleGateway::new(schedule_client), cache.clone()),
        )
        .nest(
            "/api/graduation",
            graduation_router(
                PgTaRegistry::new(pool.clone()),
                HttpGraduationGateway::new(graduation_client),
                cache.clone(),
            ),
        )
        .layer(axum::middleware::from_fn(move |req, next| {
            require_session(session_state.clone(), req, next)
        }));

    // Build router
    let app = Router::new()
        .nest("/api/session", session_router(session_store, session_config))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = config.listen_addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
