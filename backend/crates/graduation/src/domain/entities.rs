//! Domain Entities
//!
//! Read-only projections of graduation-service payloads and the identity
//! store's teaching-assistant records. Upstream owns these shapes; only the
//! fields this layer consumes are modeled, validated on receipt at the
//! client boundary.

use kernel::id::{TaId, UserId};
use serde::Deserialize;

/// Reference to a person inside an upstream record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub full_name: String,
}

/// A student's enrollment in a graduation project
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student: PersonRef,
}

/// An instructor supervising a graduation group
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorTeaching {
    pub instructor: PersonRef,
}

/// A teaching assistant assisting a graduation group
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantTeaching {
    pub ta: PersonRef,
}

/// One graduation project group with its attached collections
///
/// `assistant_teachings` being empty is a valid, expected state; whether it
/// surfaces in a view is decided once, in the aggregation layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraduationGroup {
    pub project_title: String,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default)]
    pub instructor_teachings: Vec<InstructorTeaching>,
    #[serde(default)]
    pub assistant_teachings: Vec<AssistantTeaching>,
}

/// Teaching-assistant record on file in the identity store
#[derive(Debug, Clone)]
pub struct TaRecord {
    pub ta_id: TaId,
    pub user_id: UserId,
    pub full_name: String,
}
