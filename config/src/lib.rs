use std::fs::File;

use anyhow::{Context, Result};
use serde::Deserialize;

use self::{
    api::ApiConfig, db::DbConfig, hash::HashConfig, ingest::IngestConfig, log::LogConfig,
    storage::StorageConfig, token::TokenConfig,
};

pub mod api;
pub mod db;
pub mod hash;
pub mod ingest;
pub mod log;
pub mod storage;
pub mod token;

#[derive(Deserialize)]
pub struct Config {
    log: LogConfig,
    hash: HashConfig,
    token: TokenConfig,
    db: DbConfig,
    storage: StorageConfig,
    #[serde(default)]
    ingest: IngestConfig,
    api: ApiConfig,
}

impl Config {
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn ingest(&self) -> &IngestConfig {
        &self.ingest
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn from_path(path: &str) -> Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open config file {path}"))?;
    serde_yaml::from_reader::<_, Config>(file)
        .with_context(|| format!("Failed to parse config file {path}"))
}

pub fn from_str(yaml: &str) -> Result<Config> {
    Ok(serde_yaml::from_str::<Config>(yaml)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
log:
  display_level: true
  level_filter: INFO
hash:
  argon2:
    algorithm: Argon2id
    version: V0x13
token:
  jwt:
    secret: change-me
    expiry_duration: 86400
db:
  sqlite:
    path: ./data/devora.db
    max_connections: 4
storage:
  path: ./data/storage
  bucket: project-images
  public_url: http://localhost:8080
api:
  rest:
    host: 0.0.0.0
    port: 8080
"#;

    #[test]
    fn parses_sample_config() {
        let config = from_str(SAMPLE).expect("sample config should parse");

        assert_eq!(config.hash().argon2().algorithm(), "Argon2id");
        assert_eq!(*config.token().jwt().expiry_duration(), 86400);
        assert!(config.db().postgres().is_none());
        let sqlite = config.db().sqlite().as_ref().expect("sqlite section");
        assert_eq!(sqlite.path(), "./data/devora.db");
        assert_eq!(config.storage().bucket(), "project-images");
        assert_eq!(*config.api().rest().port(), 8080);
    }

    #[test]
    fn ingest_section_falls_back_to_defaults() {
        let config = from_str(SAMPLE).unwrap();

        assert_eq!(*config.ingest().timeout(), 30);
        assert_eq!(*config.ingest().max_size(), 10 * 1024 * 1024);
    }

    #[test]
    fn missing_section_is_rejected() {
        assert!(from_str("log:\n  display_level: true\n  level_filter: INFO\n").is_err());
    }
}
