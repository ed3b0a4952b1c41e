//! Gateway Traits
//!
//! Ports to the graduation domain service. Implementations are in the
//! infrastructure layer; failures stay typed as [`UpstreamError`] so the
//! application layer decides what is fatal and what degrades.

use kernel::context::RequestContext;
use platform::upstream::UpstreamError;

use crate::domain::entities::{AssistantTeaching, Enrollment, GraduationGroup, InstructorTeaching};

/// The caller's graduation teachings, split by capacity
#[derive(Debug, Clone, Default)]
pub struct GraduationTeachings {
    pub instructor_teachings: Vec<InstructorTeaching>,
    pub ta_teachings: Vec<AssistantTeaching>,
}

/// Graduation service gateway trait
#[trait_variant::make(GraduationGateway: Send)]
pub trait LocalGraduationGateway {
    /// Fetch the caller's graduation project groups
    async fn my_groups(&self, ctx: &RequestContext)
    -> Result<Vec<GraduationGroup>, UpstreamError>;

    /// Fetch the caller's graduation enrollments
    async fn my_enrollments(&self, ctx: &RequestContext) -> Result<Vec<Enrollment>, UpstreamError>;

    /// Fetch the caller's graduation teachings
    async fn teachings(&self, ctx: &RequestContext) -> Result<GraduationTeachings, UpstreamError>;
}
