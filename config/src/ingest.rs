use serde::Deserialize;

#[derive(Deserialize)]
pub struct IngestConfig {
    #[serde(default = "default_timeout")]
    timeout: u64,
    #[serde(default = "default_max_size")]
    max_size: usize,
}

impl IngestConfig {
    /// Remote image fetch timeout, in seconds.
    pub fn timeout(&self) -> &u64 {
        &self.timeout
    }

    /// Largest remote image accepted, in bytes.
    pub fn max_size(&self) -> &usize {
        &self.max_size
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            max_size: default_max_size(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_size() -> usize {
    10 * 1024 * 1024
}
