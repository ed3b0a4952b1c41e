//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ScheduleAppState;
pub use router::{schedule_router, schedule_router_generic};
