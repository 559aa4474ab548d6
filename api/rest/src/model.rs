use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use dv_error::Error;
use serde::Serialize;

pub mod admin_auth;
pub mod admin_project;
pub mod admin_request;
pub mod admin_stats;
pub mod admin_storage;
pub mod page_view;
pub mod portfolio;
pub mod project;
pub mod request;
pub mod submit_request;

#[derive(Serialize)]
pub struct Response {
    error: String,
}

impl Response {
    pub fn data<T: Serialize>(status_code: &StatusCode, data: &T) -> HttpResponse {
        match serde_json::to_value(data) {
            Ok(data) => HttpResponseBuilder::new(*status_code).json(data),
            Err(err) => Self::error(&Error::UnknownError(err.to_string())),
        }
    }

    pub fn error(err: &Error) -> HttpResponse {
        let status_code = match StatusCode::from_u16(err.status_code()) {
            Ok(status_code) => status_code,
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self::error_raw(&status_code, &err.to_string())
    }

    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        if status_code.is_server_error() {
            dv_log::error(None, message);
        } else {
            dv_log::warn(None, message);
        }

        HttpResponseBuilder::new(*status_code).json(Self {
            error: message.to_owned(),
        })
    }
}

/// `{"success": true}`
#[derive(Serialize)]
pub struct SuccessResJson {
    success: bool,
}

impl SuccessResJson {
    pub fn new() -> Self {
        Self { success: true }
    }
}

/// Turns an empty or missing optional string into `None`.
pub fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|value| !value.is_empty())
        .map(|value| value.to_owned())
}
