//! Presentation Layer
//!
//! Middleware, HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::SessionAppState;
pub use middleware::{SessionMiddlewareState, require_session};
pub use router::{session_router, session_router_generic};
