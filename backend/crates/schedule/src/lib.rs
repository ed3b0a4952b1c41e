//! Schedule (Teaching Assignments) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and the scheduling-service gateway trait
//! - `application/` - Use cases
//! - `infra/` - HTTP gateway implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Aggregation Model
//! - Single paginated list: the caller's teaching assignments from the
//!   scheduling service, wrapped by the shared pagination contract
//! - The scheduling fetch is the view's primary data; any failure aborts
//!   the view with a typed error
//! - A successful read reports the view's cache tag for invalidation so
//!   stale cached copies are refreshed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::list_teachings::{
    ListTeachingsOutput, ListTeachingsUseCase, TEACHINGS_CACHE_TAG,
};
pub use error::{ScheduleError, ScheduleResult};
pub use infra::http::HttpScheduleGateway;
pub use presentation::router::schedule_router;

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

pub mod gateway {
    pub use crate::infra::http::HttpScheduleGateway;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
