use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::middleware::HttpAuthentication;
use dv_dao::page_view::PageViewDao;

use crate::{
    context::ApiRestCtx,
    middleware::admin_guard::admin_validator,
    model::{admin_stats::AdminStatsResJson, Response},
};

pub fn admin_stats_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin-stats")
            .wrap(HttpAuthentication::bearer(admin_validator))
            .route(web::get().to(stats)),
    );
}

async fn stats(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    match PageViewDao::db_count(ctx.dao().db()).await {
        Ok(page_views) => Response::data(&StatusCode::OK, &AdminStatsResJson::new(&page_views)),
        Err(err) => Response::error(&err.into()),
    }
}
