//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{HeaderMap, header};
use platform::cache::{CacheTagRegistry, apply_invalidations};
use std::sync::Arc;

use kernel::context::RequestContext;
use kernel::text::Locale;

use crate::application::overview::{
    GRADUATION_CACHE_TAG, GraduationOverview, GraduationOverviewUseCase,
};
use crate::domain::gateway::GraduationGateway;
use crate::domain::repository::TaRegistry;
use crate::error::GraduationResult;
use crate::presentation::dto::GraduationViewResponse;

/// Shared state for graduation handlers
#[derive(Clone)]
pub struct GraduationAppState<R, G>
where
    R: TaRegistry + Clone + Send + Sync + 'static,
    G: GraduationGateway + Clone + Send + Sync + 'static,
{
    pub registry: Arc<R>,
    pub gateway: Arc<G>,
    pub cache: Arc<CacheTagRegistry>,
}

/// GET /api/graduation/overview
pub async fn graduation_overview<R, G>(
    State(state): State<GraduationAppState<R, G>>,
    Extension(ctx): Extension<RequestContext>,
    headers: HeaderMap,
) -> GraduationResult<Json<GraduationViewResponse>>
where
    R: TaRegistry + Clone + Send + Sync + 'static,
    G: GraduationGateway + Clone + Send + Sync + 'static,
{
    let locale = Locale::from_accept_language(
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );

    let use_case = GraduationOverviewUseCase::new(state.registry.clone(), state.gateway.clone());

    match use_case.execute(&ctx).await? {
        GraduationOverview::Unauthorized => Ok(Json(GraduationViewResponse::unauthorized())),
        GraduationOverview::Authorized(data) => {
            // The response never waits on invalidation completing
            apply_invalidations(state.cache.clone(), data.invalidate.clone());
            state.cache.mark_fresh(&GRADUATION_CACHE_TAG);

            Ok(Json(GraduationViewResponse::build(locale, &data)))
        }
    }
}
