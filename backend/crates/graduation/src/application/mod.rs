//! Application Layer
//!
//! Use cases.

pub mod overview;

// Re-exports
pub use overview::{GraduationOverview, GraduationOverviewUseCase, OverviewData};
