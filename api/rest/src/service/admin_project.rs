use std::str::FromStr;

use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::middleware::HttpAuthentication;
use dv_dao::project::{ProjectCategory, ProjectDao};
use dv_error::Error;
use uuid::Uuid;

use crate::{
    context::ApiRestCtx,
    middleware::admin_guard::admin_validator,
    model::{
        admin_project::{AdminProjectReqJson, ProjectSavedResJson},
        project::{ProjectListResJson, ProjectReqJson, ProjectResJson},
        Response, SuccessResJson,
    },
    util::image_ingest::{self, ResolvedImage},
};

pub fn admin_project_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin-projects")
            .wrap(HttpAuthentication::bearer(admin_validator))
            .route(web::post().to(admin_project)),
    );
}

async fn admin_project(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<AdminProjectReqJson>,
) -> HttpResponse {
    dv_log::debug(None, format!("[ApiRest] admin-projects '{}'", data.action()));

    let res = match data.action() {
        "create" => create(&ctx, data.project()).await,
        "update" => update(&ctx, data.project_id(), data.project()).await,
        "delete" => delete(&ctx, data.project_id()).await,
        "list" => list(&ctx).await,
        _ => Err(Error::InvalidAction),
    };

    match res {
        Ok(res) => res,
        Err(err) => Response::error(&err),
    }
}

async fn create(
    ctx: &ApiRestCtx,
    project: &Option<ProjectReqJson>,
) -> Result<HttpResponse, Error> {
    let project = required_project(project)?;
    let category = parse_category(project.category())?;
    let image = resolve_image(ctx, project.image_url()).await?;

    let project_data = ProjectDao::new(
        project.title(),
        project.description(),
        &category,
        image.image_url(),
        project.technologies(),
        project.features(),
        project.demo_url(),
    );
    if let Err(err) = project_data.db_insert(ctx.dao().db()).await {
        discard_ingested(ctx, &image).await;
        return Err(err.into());
    }

    dv_log::info(
        Some("📁"),
        format!("[ApiRest] Created project {}", project_data.id()),
    );

    Ok(Response::data(
        &StatusCode::OK,
        &ProjectSavedResJson::new(ProjectResJson::from_dao(&project_data)),
    ))
}

async fn update(
    ctx: &ApiRestCtx,
    project_id: &Option<Uuid>,
    project: &Option<ProjectReqJson>,
) -> Result<HttpResponse, Error> {
    let project_id = required_project_id(project_id)?;
    let project = required_project(project)?;
    let category = parse_category(project.category())?;

    let mut project_data = match ProjectDao::db_select(ctx.dao().db(), project_id).await? {
        Some(project_data) => project_data,
        None => return Err(Error::NotFound("Project not found".to_owned())),
    };
    let previous_image_url = project_data.image_url().clone();

    let image = resolve_image(ctx, project.image_url()).await?;

    project_data.set_title(project.title());
    project_data.set_description(project.description());
    project_data.set_category(&category);
    project_data.set_image_url(image.image_url());
    project_data.set_technologies(project.technologies());
    project_data.set_features(project.features());
    project_data.set_demo_url(project.demo_url());

    match project_data.db_update(ctx.dao().db()).await {
        Ok(true) => (),
        Ok(false) => {
            discard_ingested(ctx, &image).await;
            return Err(Error::NotFound("Project not found".to_owned()));
        }
        Err(err) => {
            discard_ingested(ctx, &image).await;
            return Err(err.into());
        }
    }

    if previous_image_url != *project_data.image_url() {
        discard_unreferenced_image(ctx, &previous_image_url).await;
    }

    dv_log::info(
        Some("📁"),
        format!("[ApiRest] Updated project {}", project_data.id()),
    );

    Ok(Response::data(
        &StatusCode::OK,
        &ProjectSavedResJson::new(ProjectResJson::from_dao(&project_data)),
    ))
}

async fn delete(ctx: &ApiRestCtx, project_id: &Option<Uuid>) -> Result<HttpResponse, Error> {
    let project_id = required_project_id(project_id)?;

    let project_data = ProjectDao::db_select(ctx.dao().db(), project_id).await?;
    ProjectDao::db_delete(ctx.dao().db(), project_id).await?;

    if let Some(project_data) = project_data {
        discard_unreferenced_image(ctx, project_data.image_url()).await;
        dv_log::info(Some("🗑️"), format!("[ApiRest] Deleted project {project_id}"));
    }

    Ok(Response::data(&StatusCode::OK, &SuccessResJson::new()))
}

async fn list(ctx: &ApiRestCtx) -> Result<HttpResponse, Error> {
    let projects_data = ProjectDao::db_select_many(ctx.dao().db(), &None).await?;

    Ok(Response::data(
        &StatusCode::OK,
        &ProjectListResJson::new(&projects_data),
    ))
}

fn required_project(project: &Option<ProjectReqJson>) -> Result<&ProjectReqJson, Error> {
    match project {
        Some(project) => Ok(project),
        None => Err(Error::ValidationError("project is required".to_owned())),
    }
}

fn required_project_id(project_id: &Option<Uuid>) -> Result<&Uuid, Error> {
    match project_id {
        Some(project_id) => Ok(project_id),
        None => Err(Error::ValidationError("projectId is required".to_owned())),
    }
}

fn parse_category(category: &str) -> Result<ProjectCategory, Error> {
    ProjectCategory::from_str(category)
        .map_err(|_| Error::ValidationError(format!("Invalid category '{category}'")))
}

async fn resolve_image(
    ctx: &ApiRestCtx,
    image_url: &Option<String>,
) -> Result<ResolvedImage, Error> {
    image_ingest::resolve_image_url(ctx, image_url)
        .await
        .map_err(|err| {
            dv_log::warn(None, format!("[ApiRest] Image ingest failed: {err}"));
            Error::ImageIngestFailed
        })
}

async fn discard_ingested(ctx: &ApiRestCtx, image: &ResolvedImage) {
    if let Some(object_path) = image.ingested() {
        image_ingest::discard_object(ctx.storage().object(), object_path).await;
    }
}

/// Removes the owned object behind `image_url` unless another project still
/// points at it.
async fn discard_unreferenced_image(ctx: &ApiRestCtx, image_url: &Option<String>) {
    let storage = ctx.storage().object();
    let (image_url, object_path) = match image_url {
        Some(image_url) => match storage.object_path_of(image_url) {
            Some(object_path) => (image_url, object_path),
            None => return,
        },
        None => return,
    };

    match ProjectDao::db_select_many(ctx.dao().db(), &None).await {
        Ok(projects_data) => {
            if projects_data
                .iter()
                .any(|project_data| project_data.image_url().as_ref() == Some(image_url))
            {
                return;
            }
        }
        Err(err) => {
            dv_log::warn(
                None,
                format!("[ApiRest] Keeping {object_path}, reference check failed: {err}"),
            );
            return;
        }
    }

    image_ingest::discard_object(storage, &object_path).await;
}
