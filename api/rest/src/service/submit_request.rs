use std::str::FromStr;

use actix_web::{http::StatusCode, web, HttpResponse};
use dv_dao::project_request::{ProjectRequestDao, RequestType};
use dv_error::Error;
use uuid::Uuid;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        non_empty,
        request::RequestResJson,
        submit_request::{
            missing_fields_message, RequestReqJson, SubmitRequestReqJson, SubmitRequestResJson,
        },
        Response,
    },
};

pub fn submit_request_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/submit-request", web::post().to(submit_request));
}

async fn submit_request(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<SubmitRequestReqJson>,
) -> HttpResponse {
    match insert_request(&ctx, data.request()).await {
        Ok(res) => res,
        Err(err) => Response::error(&err),
    }
}

async fn insert_request(
    ctx: &ApiRestCtx,
    request: &Option<RequestReqJson>,
) -> Result<HttpResponse, Error> {
    let request = match request {
        Some(request) => request,
        None => return Err(Error::ValidationError("request is required".to_owned())),
    };

    if let Err(err) = request.validate() {
        return Err(Error::ValidationError(missing_fields_message(&err)));
    }

    let request_type = request.request_type().as_deref().unwrap_or_default();
    let request_type = RequestType::from_str(request_type)
        .map_err(|_| Error::ValidationError(format!("Invalid request_type '{request_type}'")))?;

    let project_id = match non_empty(request.project_id()) {
        Some(project_id) => Some(
            Uuid::parse_str(&project_id)
                .map_err(|_| Error::ValidationError(format!("Invalid project_id '{project_id}'")))?,
        ),
        None => None,
    };

    let request_data = ProjectRequestDao::new(
        &request_type,
        request.name().as_deref().unwrap_or_default(),
        &non_empty(request.email()),
        &non_empty(request.phone()),
        &project_id,
        request.details().as_deref().unwrap_or_default(),
        &non_empty(request.company_name()),
    );
    request_data.db_insert(ctx.dao().db()).await?;

    dv_log::info(
        Some("📨"),
        format!(
            "[ApiRest] New {} request {}",
            request_data.request_type(),
            request_data.id()
        ),
    );

    Ok(Response::data(
        &StatusCode::OK,
        &SubmitRequestResJson::new(RequestResJson::from_dao(&request_data)),
    ))
}
