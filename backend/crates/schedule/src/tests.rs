//! Unit tests for schedule crate

use kernel::context::{RequestContext, UserRole};
use kernel::id::UserId;
use kernel::text::BilingualText;

use crate::domain::entities::{Course, Teaching};

fn test_context() -> RequestContext {
    RequestContext::new("bearer-token", UserId::new(), UserRole::TeachingAssistant)
}

fn teaching(code: &str, en: &str, ar: &str, credit_hours: u32) -> Teaching {
    Teaching {
        course: Course {
            code: code.to_string(),
            name: BilingualText::new(en, ar),
            credit_hours,
        },
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::*;
    use crate::application::list_teachings::{ListTeachingsUseCase, TEACHINGS_CACHE_TAG};
    use crate::domain::gateway::{ScheduleGateway, TeachingsSlice};
    use crate::error::ScheduleError;
    use kernel::page::{Offset, PAGE_LIMIT};
    use platform::upstream::{Service, UpstreamError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Scheduling gateway double recording calls and offsets
    #[derive(Clone)]
    struct MockScheduleGateway {
        teachings: Vec<Teaching>,
        total: u64,
        fail: Option<fn() -> UpstreamError>,
        calls: Arc<AtomicUsize>,
        offsets: Arc<Mutex<Vec<Offset>>>,
    }

    impl MockScheduleGateway {
        fn returning(teachings: Vec<Teaching>, total: u64) -> Self {
            Self {
                teachings,
                total,
                fail: None,
                calls: Arc::new(AtomicUsize::new(0)),
                offsets: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing(fail: fn() -> UpstreamError) -> Self {
            Self {
                fail: Some(fail),
                ..Self::returning(Vec::new(), 0)
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_offset(&self) -> Offset {
            *self.offsets.lock().unwrap().last().unwrap()
        }
    }

    impl ScheduleGateway for MockScheduleGateway {
        async fn my_teachings(
            &self,
            _ctx: &RequestContext,
            offset: Offset,
        ) -> Result<TeachingsSlice, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.offsets.lock().unwrap().push(offset);

            if let Some(fail) = self.fail {
                return Err(fail());
            }

            Ok(TeachingsSlice {
                teachings: self.teachings.clone(),
                total: self.total,
            })
        }
    }

    #[tokio::test]
    async fn test_absent_page_requests_first_slice() {
        let gateway = MockScheduleGateway::returning(vec![], 0);
        let use_case = ListTeachingsUseCase::new(Arc::new(gateway.clone()));

        use_case.execute(&test_context(), None).await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        assert_eq!(
            gateway.last_offset(),
            Offset {
                skip: 0,
                limit: PAGE_LIMIT
            }
        );
    }

    #[tokio::test]
    async fn test_page_two_skips_one_slice() {
        let gateway = MockScheduleGateway::returning(vec![], 12);
        let use_case = ListTeachingsUseCase::new(Arc::new(gateway.clone()));

        use_case.execute(&test_context(), Some(2)).await.unwrap();

        assert_eq!(
            gateway.last_offset(),
            Offset {
                skip: PAGE_LIMIT,
                limit: PAGE_LIMIT
            }
        );
    }

    #[tokio::test]
    async fn test_seven_teachings_make_two_pages() {
        let gateway =
            MockScheduleGateway::returning(vec![teaching("CS101", "Intro", "مقدمة", 3)], 7);
        let use_case = ListTeachingsUseCase::new(Arc::new(gateway));

        let output = use_case.execute(&test_context(), Some(1)).await.unwrap();

        assert_eq!(output.page.items().len(), 1);
        assert_eq!(output.page.total_count(), 7);
        assert_eq!(output.page.total_pages(PAGE_LIMIT), 2);
    }

    #[tokio::test]
    async fn test_reports_view_cache_tag() {
        let gateway = MockScheduleGateway::returning(vec![], 0);
        let use_case = ListTeachingsUseCase::new(Arc::new(gateway));

        let output = use_case.execute(&test_context(), None).await.unwrap();

        assert_eq!(output.invalidate, vec![TEACHINGS_CACHE_TAG]);
    }

    #[tokio::test]
    async fn test_primary_failure_aborts_view() {
        let gateway = MockScheduleGateway::failing(|| UpstreamError::Status {
            service: Service::Schedule,
            status: 500,
        });
        let use_case = ListTeachingsUseCase::new(Arc::new(gateway));

        let result = use_case.execute(&test_context(), None).await;

        assert!(matches!(
            result,
            Err(ScheduleError::FetchFailed {
                view: "teachings",
                ..
            })
        ));
    }
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use crate::presentation::dto::TeachingsViewResponse;
    use kernel::page::{PAGE_LIMIT, PageResult};
    use kernel::text::Locale;

    fn one_teaching_page() -> PageResult<Teaching> {
        PageResult::new(vec![teaching("CS101", "Intro", "مقدمة", 3)], 7, PAGE_LIMIT)
    }

    #[test]
    fn test_view_model_resolves_course_name_per_locale() {
        let page = one_teaching_page();

        let en = TeachingsViewResponse::build(Locale::En, &page);
        assert_eq!(en.teachings[0].course_name, "Intro");
        assert_eq!(en.teachings[0].course_code, "CS101");
        assert_eq!(en.teachings[0].credit_hours, 3);
        assert_eq!(en.total_pages, 2);

        let ar = TeachingsViewResponse::build(Locale::Ar, &page);
        assert_eq!(ar.teachings[0].course_name, "مقدمة");
        assert_eq!(ar.total_pages, 2);
    }

    #[test]
    fn test_labels_are_localized() {
        let page = one_teaching_page();

        let en = TeachingsViewResponse::build(Locale::En, &page);
        assert_eq!(en.labels.code, "Code");
        assert_eq!(en.labels.credit_hours, "Credit Hours");

        let ar = TeachingsViewResponse::build(Locale::Ar, &page);
        assert_eq!(ar.labels.code, "الرمز");
        assert_eq!(ar.labels.title, "مقرراتي");
    }

    #[test]
    fn test_view_model_serialization() {
        let view = TeachingsViewResponse::build(Locale::En, &one_teaching_page());
        let json = serde_json::to_string(&view).unwrap();

        assert!(json.contains(r#""totalPages":2"#));
        assert!(json.contains(r#""courseCode":"CS101""#));
        assert!(json.contains(r#""creditHours":3"#));
    }
}

#[cfg(test)]
mod entity_tests {
    use super::*;

    #[test]
    fn test_teaching_deserializes_upstream_shape() {
        let json = r#"{
            "course": {
                "code": "CS101",
                "name": {"en": "Intro", "ar": "مقدمة"},
                "creditHours": 3
            }
        }"#;

        let parsed: Teaching = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.course.code, "CS101");
        assert_eq!(parsed.course.name.en, "Intro");
        assert_eq!(parsed.course.credit_hours, 3);
    }

    #[test]
    fn test_teaching_rejects_missing_course() {
        let result = serde_json::from_str::<Teaching>(r#"{"room": "B1"}"#);
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::ScheduleError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use platform::upstream::{Service, UpstreamError};

    #[test]
    fn test_upstream_status_maps_to_bad_gateway() {
        let err = ScheduleError::fetch_failed(
            "teachings",
            UpstreamError::Status {
                service: Service::Schedule,
                status: 500,
            },
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_upstream_timeout_maps_to_gateway_timeout() {
        let err = ScheduleError::fetch_failed(
            "teachings",
            UpstreamError::Timeout {
                service: Service::Schedule,
            },
        );
        assert_eq!(err.into_response().status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ScheduleError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
