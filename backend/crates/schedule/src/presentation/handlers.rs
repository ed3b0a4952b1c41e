//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Query, State};
use axum::http::{HeaderMap, header};
use platform::cache::{CacheTagRegistry, apply_invalidations};
use serde::Deserialize;
use std::sync::Arc;

use kernel::context::RequestContext;
use kernel::text::Locale;

use crate::application::list_teachings::{ListTeachingsUseCase, TEACHINGS_CACHE_TAG};
use crate::domain::gateway::ScheduleGateway;
use crate::error::ScheduleResult;
use crate::presentation::dto::TeachingsViewResponse;

/// Shared state for schedule handlers
#[derive(Clone)]
pub struct ScheduleAppState<G>
where
    G: ScheduleGateway + Clone + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub cache: Arc<CacheTagRegistry>,
}

/// Query parameters for paginated list views
///
/// The page is taken as a signed integer so that non-positive values
/// normalize to the first page instead of rejecting the request.
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    fn page_number(&self) -> Option<u32> {
        self.page.and_then(|p| u32::try_from(p).ok())
    }
}

/// GET /api/teachings/me
pub async fn list_my_teachings<G>(
    State(state): State<ScheduleAppState<G>>,
    Extension(ctx): Extension<RequestContext>,
    headers: HeaderMap,
    Query(params): Query<PageParams>,
) -> ScheduleResult<Json<TeachingsViewResponse>>
where
    G: ScheduleGateway + Clone + Send + Sync + 'static,
{
    let locale = Locale::from_accept_language(
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );

    let use_case = ListTeachingsUseCase::new(state.gateway.clone());

    let output = use_case.execute(&ctx, params.page_number()).await?;

    // The response never waits on invalidation completing
    apply_invalidations(state.cache.clone(), output.invalidate);
    state.cache.mark_fresh(&TEACHINGS_CACHE_TAG);

    Ok(Json(TeachingsViewResponse::build(locale, &output.page)))
}
