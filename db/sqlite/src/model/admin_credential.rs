use sqlx::{
    prelude::FromRow,
    types::chrono::{DateTime, Utc},
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct AdminCredentialModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    password_hash: String,
}

impl AdminCredentialModel {
    pub fn new(id: &Uuid, created_at: &DateTime<Utc>, password_hash: &str) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            password_hash: password_hash.to_owned(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}
