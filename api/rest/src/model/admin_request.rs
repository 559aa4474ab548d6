use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::request::RequestWithProjectResJson;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRequestReqJson {
    #[serde(default)]
    action: String,
    request_id: Option<Uuid>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl AdminRequestReqJson {
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn request_id(&self) -> &Option<Uuid> {
        &self.request_id
    }

    pub fn limit(&self) -> &Option<i64> {
        &self.limit
    }

    pub fn offset(&self) -> &Option<i64> {
        &self.offset
    }
}

#[derive(Serialize)]
pub struct RequestListResJson {
    requests: Vec<RequestWithProjectResJson>,
    total: i64,
}

impl RequestListResJson {
    pub fn new(requests: Vec<RequestWithProjectResJson>, total: &i64) -> Self {
        Self {
            requests,
            total: *total,
        }
    }
}
