//! Graduation Overview Use Case
//!
//! Role gate + fan-out aggregation. The teaching-assistant role gate must
//! complete and succeed before any upstream call is issued; the group,
//! enrollment, and teaching fetches then run concurrently and merge into
//! one view. Groups are the view's primary data. Enrollments and teachings
//! are display context: on failure they degrade to empty collections, and
//! the degraded sections are named on the output so the caller can tell
//! "couldn't be fetched" apart from "genuinely no data".

use std::sync::Arc;

use kernel::context::RequestContext;
use platform::cache::CacheTag;

use crate::domain::entities::{Enrollment, GraduationGroup};
use crate::domain::gateway::{GraduationGateway, GraduationTeachings};
use crate::domain::repository::TaRegistry;
use crate::error::{GraduationError, GraduationResult};

/// Cache tag backing the graduation view path
pub const GRADUATION_CACHE_TAG: CacheTag = CacheTag::from_static("/graduation");

/// The graduation view in one of its two legitimate states
#[derive(Debug)]
pub enum GraduationOverview {
    /// No teaching-assistant record on file: nothing to show
    Unauthorized,
    Authorized(OverviewData),
}

/// Merged graduation view data
#[derive(Debug)]
pub struct OverviewData {
    pub groups: Vec<GraduationGroup>,
    pub enrollments: Vec<Enrollment>,
    pub teachings: GraduationTeachings,
    /// Secondary sections replaced by empty defaults after a fetch failure
    pub degraded: Vec<&'static str>,
    /// Cache tags the caller should invalidate, applied fire-and-forget
    pub invalidate: Vec<CacheTag>,
}

/// Graduation overview use case
pub struct GraduationOverviewUseCase<R, G>
where
    R: TaRegistry,
    G: GraduationGateway,
{
    registry: Arc<R>,
    gateway: Arc<G>,
}

impl<R, G> GraduationOverviewUseCase<R, G>
where
    R: TaRegistry,
    G: GraduationGateway,
{
    pub fn new(registry: Arc<R>, gateway: Arc<G>) -> Self {
        Self { registry, gateway }
    }

    pub async fn execute(&self, ctx: &RequestContext) -> GraduationResult<GraduationOverview> {
        // Role gate: re-checked on every request so the view always
        // reflects the TA record currently on file.
        let Some(record) = self.registry.find_by_user(&ctx.user_id).await? else {
            tracing::debug!(user_id = %ctx.user_id, "No teaching-assistant record on file");
            return Ok(GraduationOverview::Unauthorized);
        };

        // The fan-out fetches are independent of each other
        let (groups, enrollments, teachings) = tokio::join!(
            self.gateway.my_groups(ctx),
            self.gateway.my_enrollments(ctx),
            self.gateway.teachings(ctx),
        );

        let groups = groups.map_err(|e| GraduationError::fetch_failed("graduation", e))?;

        let mut degraded = Vec::new();

        let enrollments = enrollments.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Enrollments fetch degraded to empty");
            degraded.push("enrollments");
            Vec::new()
        });

        let teachings = teachings.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Teachings fetch degraded to empty");
            degraded.push("teachings");
            GraduationTeachings::default()
        });

        tracing::debug!(
            ta_id = %record.ta_id,
            groups = groups.len(),
            "Graduation overview assembled"
        );

        Ok(GraduationOverview::Authorized(OverviewData {
            groups,
            enrollments,
            teachings,
            degraded,
            invalidate: vec![GRADUATION_CACHE_TAG],
        }))
    }
}
