//! Router composition tests
//!
//! Exercise the session middleware and view routers wired the way `main`
//! wires them, with in-memory doubles standing in for the identity store
//! and the upstream domain services.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

use kernel::context::RequestContext;
use kernel::id::UserId;
use kernel::page::Offset;
use platform::cache::CacheTagRegistry;
use platform::upstream::UpstreamError;

use graduation::domain::entities::{Enrollment, GraduationGroup, TaRecord};
use graduation::domain::gateway::{GraduationGateway, GraduationTeachings};
use graduation::domain::repository::TaRegistry;
use graduation::error::GraduationResult;
use graduation::router::graduation_router_generic;
use schedule::domain::gateway::{ScheduleGateway, TeachingsSlice};
use schedule::router::schedule_router_generic;
use session::SessionConfig;
use session::domain::entity::session::Session;
use session::domain::repository::SessionStore;
use session::error::SessionResult;
use session::middleware::{SessionMiddlewareState, require_session};

fn make_token(user_id: Uuid, role: &str) -> String {
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = b64.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = b64.encode(format!(r#"{{"userId":"{user_id}","role":"{role}"}}"#));
    format!("{header}.{payload}.signature")
}

fn make_session(user_id: Uuid, role: &str) -> Session {
    Session {
        session_id: Uuid::new_v4(),
        user_id: UserId::from_uuid(user_id),
        access_token: make_token(user_id, role),
        expires_at_ms: Utc::now().timestamp_millis() + 60_000,
        created_at: Utc::now(),
    }
}

/// Identity-store session double
#[derive(Clone, Default)]
struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl MemorySessionStore {
    fn insert(&self, cookie: &str, session: Session) {
        self.sessions
            .lock()
            .unwrap()
            .insert(cookie.to_string(), session);
    }
}

impl SessionStore for MemorySessionStore {
    async fn get_session(&self, session_token: &str) -> SessionResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(session_token).cloned())
    }
}

/// Scheduling gateway double counting upstream calls
#[derive(Clone, Default)]
struct CountingScheduleGateway {
    calls: Arc<AtomicUsize>,
}

impl ScheduleGateway for CountingScheduleGateway {
    async fn my_teachings(
        &self,
        _ctx: &RequestContext,
        _offset: Offset,
    ) -> Result<TeachingsSlice, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TeachingsSlice {
            teachings: vec![],
            total: 0,
        })
    }
}

/// Graduation backend double: role gate plus counting gateway
#[derive(Clone)]
struct CountingGraduationBackend {
    on_file: bool,
    registry_calls: Arc<AtomicUsize>,
    gateway_calls: Arc<AtomicUsize>,
}

impl CountingGraduationBackend {
    fn new(on_file: bool) -> Self {
        Self {
            on_file,
            registry_calls: Arc::new(AtomicUsize::new(0)),
            gateway_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl TaRegistry for CountingGraduationBackend {
    async fn find_by_user(&self, user_id: &UserId) -> GraduationResult<Option<TaRecord>> {
        self.registry_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.on_file.then(|| TaRecord {
            ta_id: kernel::id::TaId::new(),
            user_id: *user_id,
            full_name: "Sara Adel".to_string(),
        }))
    }
}

impl GraduationGateway for CountingGraduationBackend {
    async fn my_groups(&self, _ctx: &RequestContext) -> Result<Vec<GraduationGroup>, UpstreamError> {
        self.gateway_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn my_enrollments(&self, _ctx: &RequestContext) -> Result<Vec<Enrollment>, UpstreamError> {
        self.gateway_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn teachings(&self, _ctx: &RequestContext) -> Result<GraduationTeachings, UpstreamError> {
        self.gateway_calls.fetch_add(1, Ordering::SeqCst);
        Ok(GraduationTeachings::default())
    }
}

fn protected_app(
    store: MemorySessionStore,
    schedule_gateway: CountingScheduleGateway,
    graduation_backend: CountingGraduationBackend,
) -> Router {
    let session_state = SessionMiddlewareState {
        store: Arc::new(store),
        config: Arc::new(SessionConfig::default()),
    };
    let cache = Arc::new(CacheTagRegistry::new());

    Router::new()
        .nest(
            "/api/teachings",
            schedule_router_generic(schedule_gateway, cache.clone()),
        )
        .nest(
            "/api/graduation",
            graduation_router_generic(
                graduation_backend.clone(),
                graduation_backend,
                cache,
            ),
        )
        .layer(axum::middleware::from_fn(move |req, next| {
            require_session(session_state.clone(), req, next)
        }))
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, format!("portal_session={cookie}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_no_session_denies_before_any_upstream_call() {
    let store = MemorySessionStore::default();
    let schedule_gateway = CountingScheduleGateway::default();
    let graduation_backend = CountingGraduationBackend::new(true);
    let app = protected_app(
        store,
        schedule_gateway.clone(),
        graduation_backend.clone(),
    );

    let response = app
        .clone()
        .oneshot(get("/api/teachings/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get("X-Auth-Required").unwrap(),
        "true"
    );

    let response = app
        .oneshot(get("/api/graduation/overview", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(schedule_gateway.calls.load(Ordering::SeqCst), 0);
    assert_eq!(graduation_backend.registry_calls.load(Ordering::SeqCst), 0);
    assert_eq!(graduation_backend.gateway_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_session_cookie_is_denied() {
    let app = protected_app(
        MemorySessionStore::default(),
        CountingScheduleGateway::default(),
        CountingGraduationBackend::new(true),
    );

    let response = app
        .oneshot(get("/api/teachings/me", Some("stale-cookie")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_session_reaches_teachings_view() {
    let store = MemorySessionStore::default();
    store.insert("cookie1", make_session(Uuid::new_v4(), "teaching_assistant"));

    let schedule_gateway = CountingScheduleGateway::default();
    let app = protected_app(
        store,
        schedule_gateway.clone(),
        CountingGraduationBackend::new(true),
    );

    let response = app
        .oneshot(get("/api/teachings/me?page=2", Some("cookie1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(schedule_gateway.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_valid_session_fans_out_graduation_view() {
    let store = MemorySessionStore::default();
    store.insert("cookie1", make_session(Uuid::new_v4(), "teaching_assistant"));

    let graduation_backend = CountingGraduationBackend::new(true);
    let app = protected_app(
        store,
        CountingScheduleGateway::default(),
        graduation_backend.clone(),
    );

    let response = app
        .oneshot(get("/api/graduation/overview", Some("cookie1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(graduation_backend.registry_calls.load(Ordering::SeqCst), 1);
    assert_eq!(graduation_backend.gateway_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_not_a_ta_on_file_gets_unauthorized_state_without_fan_out() {
    let store = MemorySessionStore::default();
    store.insert("cookie1", make_session(Uuid::new_v4(), "student"));

    let graduation_backend = CountingGraduationBackend::new(false);
    let app = protected_app(
        store,
        CountingScheduleGateway::default(),
        graduation_backend.clone(),
    );

    let response = app
        .oneshot(get("/api/graduation/overview", Some("cookie1")))
        .await
        .unwrap();

    // A legitimate empty state, not an error
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(graduation_backend.registry_calls.load(Ordering::SeqCst), 1);
    assert_eq!(graduation_backend.gateway_calls.load(Ordering::SeqCst), 0);
}
