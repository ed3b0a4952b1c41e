//! Domain Layer
//!
//! Contains entities, the identity-store repository trait, and the
//! graduation-service gateway trait.

pub mod entities;
pub mod gateway;
pub mod repository;

// Re-exports
pub use entities::{Enrollment, GraduationGroup, PersonRef, TaRecord};
pub use gateway::{GraduationGateway, GraduationTeachings};
pub use repository::TaRegistry;
