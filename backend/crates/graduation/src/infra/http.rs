//! HTTP Gateway Implementation
//!
//! Calls the graduation service through the shared upstream transport.
//! Each endpoint has an explicit response schema validated on receipt.

use kernel::context::RequestContext;
use platform::upstream::{ServiceClient, UpstreamError};
use serde::Deserialize;

use crate::domain::entities::{AssistantTeaching, Enrollment, GraduationGroup, InstructorTeaching};
use crate::domain::gateway::{GraduationGateway, GraduationTeachings};

/// Graduation service gateway over HTTP
#[derive(Clone)]
pub struct HttpGraduationGateway {
    client: ServiceClient,
}

impl HttpGraduationGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

/// Schema of GET /grad-enrolls
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnrollmentsResponse {
    #[serde(default)]
    enrollments: Vec<Enrollment>,
}

/// Schema of GET /grad-teachings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeachingsResponse {
    #[serde(default)]
    instructor_teachings: Vec<InstructorTeaching>,
    #[serde(default)]
    ta_teachings: Vec<AssistantTeaching>,
}

impl GraduationGateway for HttpGraduationGateway {
    async fn my_groups(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<GraduationGroup>, UpstreamError> {
        // GET /mygroup returns a bare array
        self.client
            .get_json("/mygroup", ctx.bearer_token(), &[])
            .await
    }

    async fn my_enrollments(&self, ctx: &RequestContext) -> Result<Vec<Enrollment>, UpstreamError> {
        let response: EnrollmentsResponse = self
            .client
            .get_json("/grad-enrolls", ctx.bearer_token(), &[])
            .await?;

        Ok(response.enrollments)
    }

    async fn teachings(&self, ctx: &RequestContext) -> Result<GraduationTeachings, UpstreamError> {
        let response: TeachingsResponse = self
            .client
            .get_json("/grad-teachings", ctx.bearer_token(), &[])
            .await?;

        Ok(GraduationTeachings {
            instructor_teachings: response.instructor_teachings,
            ta_teachings: response.ta_teachings,
        })
    }
}
