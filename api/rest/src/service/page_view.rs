use actix_web::{http::StatusCode, web, HttpResponse};
use dv_dao::page_view::PageViewDao;
use dv_error::Error;

use crate::{
    context::ApiRestCtx,
    model::{page_view::InsertPageViewReqJson, Response, SuccessResJson},
};

pub fn page_view_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/page-views", web::post().to(insert_one));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<InsertPageViewReqJson>,
) -> HttpResponse {
    if data.path().is_empty() {
        return Response::error(&Error::ValidationError("path is required".to_owned()));
    }

    if let Err(err) = PageViewDao::new(data.path()).db_insert(ctx.dao().db()).await {
        return Response::error(&err.into());
    }

    Response::data(&StatusCode::OK, &SuccessResJson::new())
}
