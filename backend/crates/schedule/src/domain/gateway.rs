//! Gateway Traits
//!
//! Ports to the scheduling domain service. Implementations are in the
//! infrastructure layer; failures stay typed as [`UpstreamError`] so the
//! application layer decides what is fatal.

use kernel::context::RequestContext;
use kernel::page::Offset;
use platform::upstream::UpstreamError;

use crate::domain::entities::Teaching;

/// One slice of the caller's teaching assignments, as paged upstream
#[derive(Debug, Clone)]
pub struct TeachingsSlice {
    pub teachings: Vec<Teaching>,
    pub total: u64,
}

/// Scheduling service gateway trait
#[trait_variant::make(ScheduleGateway: Send)]
pub trait LocalScheduleGateway {
    /// Fetch the caller's teaching assignments
    async fn my_teachings(
        &self,
        ctx: &RequestContext,
        offset: Offset,
    ) -> Result<TeachingsSlice, UpstreamError>;
}
