use std::path::{Component, Path, PathBuf};

use anyhow::{Error, Result};
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use tokio::fs;

/// Prefix under which every bucket is served publicly.
pub const PUBLIC_PATH: &str = "/storage/v1/object/public";

/// Folder inside the bucket that holds project images.
pub const PROJECTS_FOLDER: &str = "projects";

pub const DEFAULT_EXTENSION: &str = "png";

/// A single bucket of objects kept on the local filesystem and served
/// under `{public_url}/storage/v1/object/public/{bucket}/`.
pub struct ObjectStorage {
    bucket_path: PathBuf,
    bucket: String,
    public_url: String,
}

pub struct StoredObject {
    name: String,
    public_url: String,
}

impl StoredObject {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }
}

impl ObjectStorage {
    pub async fn new(root_path: &str, bucket: &str, public_url: &str) -> Result<Self> {
        dv_log::info(Some("⚡"), "[ObjectStorage] Initializing component");

        if bucket.is_empty() || bucket.contains('/') {
            return Err(Error::msg(format!("Invalid bucket name '{bucket}'")));
        }

        let bucket_path = Path::new(root_path).join(bucket);
        fs::create_dir_all(bucket_path.join(PROJECTS_FOLDER)).await?;

        Ok(Self {
            bucket_path,
            bucket: bucket.to_owned(),
            public_url: public_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn bucket_path(&self) -> &Path {
        &self.bucket_path
    }

    /// Path segment that marks a URL as pointing into this bucket.
    pub fn public_prefix(&self) -> String {
        format!("{PUBLIC_PATH}/{}/", self.bucket)
    }

    pub fn public_url_of(&self, object_path: &str) -> String {
        format!("{}{}{}", self.public_url, self.public_prefix(), object_path)
    }

    pub fn is_owned_url(&self, url: &str) -> bool {
        url.contains(&self.public_prefix())
    }

    /// Object path (relative to the bucket) of an owned public URL.
    pub fn object_path_of(&self, url: &str) -> Option<String> {
        let prefix = self.public_prefix();
        let start = url.find(&prefix)? + prefix.len();
        let path = url[start..].split(['?', '#']).next()?;
        if path.is_empty() {
            None
        } else {
            Some(path.to_owned())
        }
    }

    /// Writes `bytes` under a fresh `projects/{millis}-{random}.{ext}` name
    /// and returns that object path.
    pub async fn upload_project_image(&self, bytes: &[u8], extension: &str) -> Result<String> {
        let object_path = format!("{PROJECTS_FOLDER}/{}", unique_file_name(extension));
        let file_path = self.resolve(&object_path)?;

        fs::write(&file_path, bytes).await?;
        dv_log::debug(
            None,
            format!("[ObjectStorage] Stored {} bytes at {object_path}", bytes.len()),
        );

        Ok(object_path)
    }

    /// Same as [`Self::upload_project_image`] but moves an already written file.
    pub async fn upload_project_image_from(
        &self,
        source: impl AsRef<Path>,
        extension: &str,
    ) -> Result<String> {
        let object_path = format!("{PROJECTS_FOLDER}/{}", unique_file_name(extension));
        let file_path = self.resolve(&object_path)?;

        fs::copy(source, &file_path).await?;

        Ok(object_path)
    }

    pub async fn delete(&self, object_path: &str) -> Result<()> {
        fs::remove_file(self.resolve(object_path)?).await?;
        dv_log::debug(None, format!("[ObjectStorage] Deleted {object_path}"));
        Ok(())
    }

    /// Objects in the projects folder, sorted by name.
    pub async fn list_project_images(&self) -> Result<Vec<StoredObject>> {
        let mut entries = fs::read_dir(self.bucket_path.join(PROJECTS_FOLDER)).await?;
        let mut objects = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                let object_path = format!("{PROJECTS_FOLDER}/{name}");
                objects.push(StoredObject {
                    name: object_path.clone(),
                    public_url: self.public_url_of(&object_path),
                });
            }
        }
        objects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(objects)
    }

    fn resolve(&self, object_path: &str) -> Result<PathBuf> {
        let relative = Path::new(object_path);
        if object_path.is_empty()
            || !relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(Error::msg(format!("Invalid object path '{object_path}'")));
        }
        Ok(self.bucket_path.join(relative))
    }
}

pub fn unique_file_name(extension: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    format!("{}-{suffix}.{extension}", Utc::now().timestamp_millis())
}

/// Extension for a fetched image: the `image/<ext>` content type first, then
/// the suffix of the last URL path segment, then [`DEFAULT_EXTENSION`].
pub fn image_extension(content_type: Option<&str>, url: &str) -> String {
    if let Some(ext) = content_type
        .and_then(|content_type| content_type.strip_prefix("image/"))
        .and_then(|subtype| subtype.split(';').next())
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
    {
        return ext.to_owned();
    }

    let path = url.split(['?', '#']).next().unwrap_or_default();
    let last = path.rsplit('/').next().unwrap_or_default();
    if let Some((_, ext)) = last.rsplit_once('.') {
        if !ext.is_empty() {
            return ext.to_owned();
        }
    }

    DEFAULT_EXTENSION.to_owned()
}

/// Extension for a directly uploaded file, taken from its name.
pub fn upload_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn storage(dir: &tempfile::TempDir) -> ObjectStorage {
        ObjectStorage::new(
            dir.path().to_str().unwrap(),
            "project-images",
            "http://localhost:8080/",
        )
        .await
        .unwrap()
    }

    #[test]
    fn extension_from_content_type() {
        assert_eq!(image_extension(Some("image/jpeg"), "https://x.io/a.png"), "jpeg");
        assert_eq!(
            image_extension(Some("image/webp; charset=binary"), "https://x.io/a"),
            "webp"
        );
    }

    #[test]
    fn extension_falls_back_to_url_then_default() {
        assert_eq!(
            image_extension(Some("application/octet-stream"), "https://x.io/pic.jpg?w=400"),
            "jpg"
        );
        assert_eq!(image_extension(None, "https://x.io/images/photo"), "png");
        assert_eq!(image_extension(Some("image/"), "https://x.io/"), "png");
    }

    #[test]
    fn upload_extension_is_lowercased() {
        assert_eq!(upload_extension(Some("Logo.PNG")), "png");
        assert_eq!(upload_extension(Some("archive.tar.gz")), "gz");
        assert_eq!(upload_extension(Some("noext")), "png");
        assert_eq!(upload_extension(None), "png");
    }

    #[test]
    fn unique_names_have_timestamp_and_suffix() {
        let name = unique_file_name("jpg");
        let (stem, ext) = name.rsplit_once('.').unwrap();
        let (millis, random) = stem.split_once('-').unwrap();

        assert_eq!(ext, "jpg");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(random.len(), 10);
        assert_ne!(name, unique_file_name("jpg"));
    }

    #[tokio::test]
    async fn public_urls_round_trip_to_object_paths() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir).await;

        let url = storage.public_url_of("projects/1-abc.png");
        assert_eq!(
            url,
            "http://localhost:8080/storage/v1/object/public/project-images/projects/1-abc.png"
        );
        assert!(storage.is_owned_url(&url));
        assert_eq!(
            storage.object_path_of(&format!("{url}?v=2")).as_deref(),
            Some("projects/1-abc.png")
        );
        assert!(!storage.is_owned_url("https://example.com/pic.jpg"));
        assert!(storage.object_path_of("https://example.com/pic.jpg").is_none());
    }

    #[tokio::test]
    async fn upload_list_delete() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir).await;

        let path = storage.upload_project_image(b"\x89PNG", "png").await.unwrap();
        assert!(path.starts_with("projects/"));
        assert!(storage.bucket_path().join(&path).exists());

        let listed = storage.list_project_images().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name(), path);
        assert_eq!(listed[0].public_url(), storage.public_url_of(&path));

        storage.delete(&path).await.unwrap();
        assert!(storage.list_project_images().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn traversal_paths_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir).await;

        assert!(storage.delete("../outside.png").await.is_err());
        assert!(storage.delete("/etc/passwd").await.is_err());
    }
}
