use sqlx::{
    prelude::FromRow,
    types::chrono::{DateTime, Utc},
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct PageViewModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    path: String,
}

impl PageViewModel {
    pub fn new(id: &Uuid, created_at: &DateTime<Utc>, path: &str) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            path: path.to_owned(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
