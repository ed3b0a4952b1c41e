//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::GraduationAppState;
pub use router::{graduation_router, graduation_router_generic};
