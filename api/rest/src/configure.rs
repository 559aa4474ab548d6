use actix_files::Files;
use actix_web::web;
use dv_storage::PUBLIC_PATH;

use crate::{
    context::ApiRestCtx,
    service::{
        admin_auth::admin_auth_api, admin_project::admin_project_api,
        admin_request::admin_request_api, admin_stats::admin_stats_api,
        admin_storage::admin_storage_api, page_view::page_view_api, portfolio::portfolio_api,
        preflight::preflight_api, root::root_api, submit_request::submit_request_api,
    },
};

pub fn configure(cfg: &mut web::ServiceConfig, ctx: &ApiRestCtx) {
    let storage = ctx.storage().object();

    cfg.configure(preflight_api)
        .configure(root_api)
        .service(
            web::scope("/api/rest")
                .configure(admin_auth_api)
                .configure(admin_project_api)
                .configure(admin_request_api)
                .configure(admin_stats_api)
                .configure(admin_storage_api)
                .configure(submit_request_api)
                .configure(portfolio_api)
                .configure(page_view_api),
        )
        .service(Files::new(
            &format!("{PUBLIC_PATH}/{}", storage.bucket()),
            storage.bucket_path(),
        ));
}
