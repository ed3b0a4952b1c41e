//! Session (Credential Resolution) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, token claims, session-store trait
//! - `application/` - Use cases and application services
//! - `infra/` - Read-only Postgres view of the identity provider's store
//! - `presentation/` - Middleware, HTTP handlers, DTOs, router
//!
//! ## Features
//! - Resolves the session cookie into an explicit `RequestContext`
//!   (bearer token + identity claims) passed to every downstream component
//! - Fails closed: missing, expired, or malformed sessions all surface as
//!   a single `Unauthenticated` outcome before any upstream call is made
//! - Session status probe for rendering surfaces
//!
//! ## Security Model
//! - Sessions and bearer tokens are issued and verified by the identity
//!   provider; this layer trusts them as issued and never mints its own
//! - Claims are decoded (not verified) from the token payload, so a
//!   tampered token only ever fails against the upstream services
//! - Sessions are re-resolved on every request, never cached

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use infra::postgres::PgSessionStore;
pub use presentation::router::session_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgSessionStore as SessionStoreImpl;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
