use serde::Deserialize;

#[derive(Deserialize)]
pub struct StorageConfig {
    path: String,
    bucket: String,
    public_url: String,
}

impl StorageConfig {
    /// Directory holding one subdirectory per bucket.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Externally reachable base URL of this server, used to build public file URLs.
    pub fn public_url(&self) -> &str {
        &self.public_url
    }
}
