use serde::Deserialize;

#[derive(Deserialize)]
pub struct InsertPageViewReqJson {
    #[serde(default)]
    path: String,
}

impl InsertPageViewReqJson {
    pub fn path(&self) -> &str {
        &self.path
    }
}
