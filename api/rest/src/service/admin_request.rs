use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::middleware::HttpAuthentication;
use dv_dao::project_request::ProjectRequestDao;
use dv_error::Error;
use uuid::Uuid;

use crate::{
    context::ApiRestCtx,
    middleware::admin_guard::admin_validator,
    model::{
        admin_request::{AdminRequestReqJson, RequestListResJson},
        request::RequestWithProjectResJson,
        Response, SuccessResJson,
    },
};

pub fn admin_request_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin-requests")
            .wrap(HttpAuthentication::bearer(admin_validator))
            .route(web::post().to(admin_request)),
    );
}

async fn admin_request(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<AdminRequestReqJson>,
) -> HttpResponse {
    dv_log::debug(None, format!("[ApiRest] admin-requests '{}'", data.action()));

    let res = match data.action() {
        "list" => list(&ctx, data.limit(), data.offset()).await,
        "mark-read" => mark_read(&ctx, data.request_id()).await,
        "delete" => delete(&ctx, data.request_id()).await,
        _ => Err(Error::InvalidAction),
    };

    match res {
        Ok(res) => res,
        Err(err) => Response::error(&err),
    }
}

async fn list(
    ctx: &ApiRestCtx,
    limit: &Option<i64>,
    offset: &Option<i64>,
) -> Result<HttpResponse, Error> {
    if limit.is_some_and(|limit| limit < 0) || offset.is_some_and(|offset| offset < 0) {
        return Err(Error::ValidationError(
            "limit and offset must not be negative".to_owned(),
        ));
    }

    let (requests_data, total) = tokio::try_join!(
        ProjectRequestDao::db_select_many_with_project(ctx.dao().db(), limit, offset),
        ProjectRequestDao::db_count(ctx.dao().db()),
    )?;

    let requests = requests_data
        .iter()
        .map(|(request, project)| RequestWithProjectResJson::from_dao(request, project))
        .collect();

    Ok(Response::data(
        &StatusCode::OK,
        &RequestListResJson::new(requests, &total),
    ))
}

async fn mark_read(ctx: &ApiRestCtx, request_id: &Option<Uuid>) -> Result<HttpResponse, Error> {
    let request_id = required_request_id(request_id)?;

    ProjectRequestDao::db_mark_read(ctx.dao().db(), request_id).await?;

    Ok(Response::data(&StatusCode::OK, &SuccessResJson::new()))
}

async fn delete(ctx: &ApiRestCtx, request_id: &Option<Uuid>) -> Result<HttpResponse, Error> {
    let request_id = required_request_id(request_id)?;

    ProjectRequestDao::db_delete(ctx.dao().db(), request_id).await?;
    dv_log::info(Some("🗑️"), format!("[ApiRest] Deleted request {request_id}"));

    Ok(Response::data(&StatusCode::OK, &SuccessResJson::new()))
}

fn required_request_id(request_id: &Option<Uuid>) -> Result<&Uuid, Error> {
    match request_id {
        Some(request_id) => Ok(request_id),
        None => Err(Error::ValidationError("requestId is required".to_owned())),
    }
}
