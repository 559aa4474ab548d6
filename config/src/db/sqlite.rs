use serde::Deserialize;

#[derive(Deserialize)]
pub struct DbSqliteConfig {
    /// Database file, created on first start.
    path: String,
    #[serde(default = "default_max_connections")]
    max_connections: u32,
}

impl DbSqliteConfig {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn max_connections(&self) -> &u32 {
        &self.max_connections
    }
}

fn default_max_connections() -> u32 {
    4
}
