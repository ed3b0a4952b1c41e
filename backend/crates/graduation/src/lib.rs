//! Graduation (Project Views) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, identity-store repository trait, service gateway
//! - `application/` - Use cases
//! - `infra/` - HTTP gateway and Postgres role-gate implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Aggregation Model
//! - Role gate first: the caller must have a teaching-assistant record on
//!   file before any upstream call is issued; its absence is a legitimate
//!   "nothing to show" state, not an error
//! - After the gate, the group, enrollment, and teaching fetches fan out
//!   concurrently and are merged into one view
//! - Group data is primary and aborts the view on failure; enrollments and
//!   teachings are display context that degrades to empty

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::overview::{
    GRADUATION_CACHE_TAG, GraduationOverview, GraduationOverviewUseCase, OverviewData,
};
pub use error::{GraduationError, GraduationResult};
pub use infra::http::HttpGraduationGateway;
pub use infra::postgres::PgTaRegistry;
pub use presentation::router::graduation_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgTaRegistry as TaRegistryImpl;
}

pub mod router {
    pub use crate::presentation::router::*;
}
