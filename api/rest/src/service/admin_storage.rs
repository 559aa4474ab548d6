use actix_multipart::form::MultipartForm;
use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::middleware::HttpAuthentication;
use dv_error::Error;

use crate::{
    context::ApiRestCtx,
    middleware::admin_guard::admin_validator,
    model::{
        admin_storage::{StoredImagesResJson, UploadImageReqForm, UploadImageResJson},
        Response,
    },
};

pub fn admin_storage_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin-storage")
            .wrap(HttpAuthentication::bearer(admin_validator))
            .route(web::get().to(find_many))
            .route(web::post().to(insert_one)),
    );
}

async fn find_many(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    match ctx.storage().object().list_project_images().await {
        Ok(objects) => Response::data(&StatusCode::OK, &StoredImagesResJson::new(&objects)),
        Err(err) => Response::error(&err.into()),
    }
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    form: MultipartForm<UploadImageReqForm>,
) -> HttpResponse {
    let max_size = *ctx.ingest().max_size();
    if *form.size() > max_size {
        return Response::error(&Error::ValidationError(format!(
            "File is larger than {max_size} bytes"
        )));
    }

    let storage = ctx.storage().object();
    let extension = dv_storage::upload_extension(form.file_name());
    let object_path = match storage
        .upload_project_image_from(form.file_path(), &extension)
        .await
    {
        Ok(object_path) => object_path,
        Err(err) => return Response::error(&err.into()),
    };

    dv_log::info(
        Some("🖼️"),
        format!("[ApiRest] Uploaded image {object_path}"),
    );

    Response::data(
        &StatusCode::OK,
        &UploadImageResJson::new(&storage.public_url_of(&object_path)),
    )
}
