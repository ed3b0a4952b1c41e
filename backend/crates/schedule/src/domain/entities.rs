//! Domain Entities
//!
//! Read-only projections of scheduling-service payloads. The scheduling
//! service owns these shapes; only the fields this layer consumes are
//! modeled, and they are validated on receipt at the client boundary.

use kernel::text::BilingualText;
use serde::Deserialize;

/// A course as carried on a teaching assignment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course code (unique, e.g. "CS101")
    pub code: String,
    /// Bilingual course name
    pub name: BilingualText,
    /// Credit hours
    pub credit_hours: u32,
}

/// One teaching-assistant assignment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teaching {
    pub course: Course,
}
