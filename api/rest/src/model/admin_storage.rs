use std::path::Path;

use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use dv_storage::StoredObject;
use serde::Serialize;

#[derive(MultipartForm)]
pub struct UploadImageReqForm {
    file: TempFile,
}

impl UploadImageReqForm {
    pub fn file_path(&self) -> &Path {
        self.file.file.path()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.file_name.as_deref()
    }

    pub fn size(&self) -> &usize {
        &self.file.size
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImageResJson {
    name: String,
    public_url: String,
}

#[derive(Serialize)]
pub struct StoredImagesResJson {
    images: Vec<StoredImageResJson>,
}

impl StoredImagesResJson {
    pub fn new(objects: &[StoredObject]) -> Self {
        Self {
            images: objects
                .iter()
                .map(|object| StoredImageResJson {
                    name: object.name().to_owned(),
                    public_url: object.public_url().to_owned(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResJson {
    success: bool,
    public_url: String,
}

impl UploadImageResJson {
    pub fn new(public_url: &str) -> Self {
        Self {
            success: true,
            public_url: public_url.to_owned(),
        }
    }
}
