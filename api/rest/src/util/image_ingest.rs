use anyhow::{Error, Result};
use dv_storage::ObjectStorage;
use reqwest::header::CONTENT_TYPE;

use crate::context::ApiRestCtx;

/// The image URL to persist for a project, plus the object written to
/// storage while resolving it, if any.
pub struct ResolvedImage {
    image_url: Option<String>,
    ingested: Option<String>,
}

impl ResolvedImage {
    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
    }

    pub fn ingested(&self) -> &Option<String> {
        &self.ingested
    }
}

/// Remote `http(s)` images are downloaded into the bucket and replaced by
/// their public URL. Owned URLs and anything else pass through untouched.
pub async fn resolve_image_url(
    ctx: &ApiRestCtx,
    image_url: &Option<String>,
) -> Result<ResolvedImage> {
    let image_url = match image_url.as_deref() {
        Some(image_url) if !image_url.is_empty() => image_url,
        _ => {
            return Ok(ResolvedImage {
                image_url: None,
                ingested: None,
            })
        }
    };

    let storage = ctx.storage().object();
    if !needs_rehost(storage, image_url) {
        return Ok(ResolvedImage {
            image_url: Some(image_url.to_owned()),
            ingested: None,
        });
    }

    dv_log::debug(None, format!("[ApiRest] Rehosting image {image_url}"));

    let mut response = ctx
        .ingest()
        .client()
        .get(image_url)
        .send()
        .await?
        .error_for_status()?;

    let max_size = *ctx.ingest().max_size();
    if response
        .content_length()
        .is_some_and(|length| length > max_size as u64)
    {
        return Err(Error::msg(format!(
            "Image at {image_url} is larger than {max_size} bytes"
        )));
    }

    let extension = dv_storage::image_extension(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok()),
        image_url,
    );

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if bytes.len() + chunk.len() > max_size {
            return Err(Error::msg(format!(
                "Image at {image_url} is larger than {max_size} bytes"
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    let object_path = storage.upload_project_image(&bytes, &extension).await?;
    dv_log::info(
        Some("🖼️"),
        format!("[ApiRest] Rehosted {image_url} as {object_path}"),
    );

    Ok(ResolvedImage {
        image_url: Some(storage.public_url_of(&object_path)),
        ingested: Some(object_path),
    })
}

pub fn needs_rehost(storage: &ObjectStorage, image_url: &str) -> bool {
    image_url.starts_with("http") && !storage.is_owned_url(image_url)
}

/// Best-effort removal of an owned object; failures are only logged.
pub async fn discard_object(storage: &ObjectStorage, object_path: &str) {
    if let Err(err) = storage.delete(object_path).await {
        dv_log::warn(
            None,
            format!("[ApiRest] Failed to delete object {object_path}: {err}"),
        );
    }
}
