use serde::Deserialize;

#[derive(Deserialize)]
pub struct FindManyProjectReqQuery {
    category: Option<String>,
}

impl FindManyProjectReqQuery {
    pub fn category(&self) -> &Option<String> {
        &self.category
    }
}
