//! List Teachings Use Case
//!
//! Single-paginated-list aggregation: build the upstream offset from the
//! requested page, call the scheduling service, wrap the slice as a page,
//! and report the view's cache tag for invalidation. The scheduling fetch
//! is the view's primary data, so any upstream failure aborts the view.

use std::sync::Arc;

use kernel::context::RequestContext;
use kernel::page::{PAGE_LIMIT, PageRequest, PageResult};
use platform::cache::CacheTag;

use crate::domain::entities::Teaching;
use crate::domain::gateway::ScheduleGateway;
use crate::error::{ScheduleError, ScheduleResult};

/// Cache tag backing the teachings view path
pub const TEACHINGS_CACHE_TAG: CacheTag = CacheTag::from_static("/teachings");

/// Output DTO for the teachings list
#[derive(Debug, Clone)]
pub struct ListTeachingsOutput {
    pub page: PageResult<Teaching>,
    /// Cache tags the caller should invalidate, applied fire-and-forget
    pub invalidate: Vec<CacheTag>,
}

/// List teachings use case
pub struct ListTeachingsUseCase<G>
where
    G: ScheduleGateway,
{
    gateway: Arc<G>,
}

impl<G> ListTeachingsUseCase<G>
where
    G: ScheduleGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        ctx: &RequestContext,
        page: Option<u32>,
    ) -> ScheduleResult<ListTeachingsOutput> {
        let request = PageRequest::new(page);
        let offset = request.to_offset(PAGE_LIMIT);

        let slice = self
            .gateway
            .my_teachings(ctx, offset)
            .await
            .map_err(|e| ScheduleError::fetch_failed("teachings", e))?;

        tracing::debug!(
            user_id = %ctx.user_id,
            page = request.page(),
            total = slice.total,
            "Fetched teaching assignments"
        );

        Ok(ListTeachingsOutput {
            page: PageResult::new(slice.teachings, slice.total, PAGE_LIMIT),
            invalidate: vec![TEACHINGS_CACHE_TAG],
        })
    }
}
