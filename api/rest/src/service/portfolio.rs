use std::str::FromStr;

use actix_web::{http::StatusCode, web, HttpResponse};
use dv_dao::project::{ProjectCategory, ProjectDao};
use dv_error::Error;

use crate::{
    context::ApiRestCtx,
    model::{portfolio::FindManyProjectReqQuery, project::ProjectListResJson, Response},
};

pub fn portfolio_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/projects", web::get().to(find_many));
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyProjectReqQuery>,
) -> HttpResponse {
    let category = match query.category() {
        Some(category) => match ProjectCategory::from_str(category) {
            Ok(category) => Some(category),
            Err(_) => {
                return Response::error(&Error::ValidationError(format!(
                    "Invalid category '{category}'"
                )))
            }
        },
        None => None,
    };

    match ProjectDao::db_select_many(ctx.dao().db(), &category).await {
        Ok(projects_data) => Response::data(
            &StatusCode::OK,
            &ProjectListResJson::new(&projects_data),
        ),
        Err(err) => Response::error(&err.into()),
    }
}
