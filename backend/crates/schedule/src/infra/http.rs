//! HTTP Gateway Implementation
//!
//! Calls the scheduling service through the shared upstream transport.
//! Each endpoint has an explicit response schema validated on receipt.

use kernel::context::RequestContext;
use kernel::page::Offset;
use platform::upstream::{ServiceClient, UpstreamError};
use serde::Deserialize;

use crate::domain::entities::Teaching;
use crate::domain::gateway::{ScheduleGateway, TeachingsSlice};

/// Scheduling service gateway over HTTP
#[derive(Clone)]
pub struct HttpScheduleGateway {
    client: ServiceClient,
}

impl HttpScheduleGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

/// Schema of GET /ta-teaching/me
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyTeachingsResponse {
    my_teachings: Vec<Teaching>,
    total_teachings: u64,
}

impl ScheduleGateway for HttpScheduleGateway {
    async fn my_teachings(
        &self,
        ctx: &RequestContext,
        offset: Offset,
    ) -> Result<TeachingsSlice, UpstreamError> {
        let query = [
            ("skip", offset.skip.to_string()),
            ("limit", offset.limit.to_string()),
        ];

        let response: MyTeachingsResponse = self
            .client
            .get_json("/ta-teaching/me", ctx.bearer_token(), &query)
            .await?;

        Ok(TeachingsSlice {
            teachings: response.my_teachings,
            total: response.total_teachings,
        })
    }
}
