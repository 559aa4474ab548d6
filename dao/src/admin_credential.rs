use anyhow::Result;
use chrono::{DateTime, Utc};
use dv_db_postgresql::model::admin_credential::AdminCredentialModel as AdminCredentialPostgresModel;
use dv_db_sqlite::model::admin_credential::AdminCredentialModel as AdminCredentialSqliteModel;
use uuid::Uuid;

use crate::Db;

/// The single admin credential of the site.
pub struct AdminCredentialDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    password_hash: String,
}

impl AdminCredentialDao {
    pub fn new(password_hash: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            created_at: Utc::now(),
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

    /// Inserts the credential unless one already exists. Returns whether
    /// this call created it.
    pub async fn db_insert_if_absent(&self, db: &Db) -> Result<bool> {
        match db {
            Db::PostgresqlDb(db) => {
                db.insert_admin_credential_if_absent(&self.to_postgresdb_model())
                    .await
            }
            Db::SqliteDb(db) => {
                db.insert_admin_credential_if_absent(&self.to_sqlitedb_model())
                    .await
            }
        }
    }

    pub async fn db_select(db: &Db) -> Result<Option<Self>> {
        match db {
            Db::PostgresqlDb(db) => Ok(db
                .select_admin_credential()
                .await?
                .map(|model| Self::from_postgresdb_model(&model))),
            Db::SqliteDb(db) => Ok(db
                .select_admin_credential()
                .await?
                .map(|model| Self::from_sqlitedb_model(&model))),
        }
    }

    fn from_postgresdb_model(model: &AdminCredentialPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            password_hash: model.password_hash().to_owned(),
        }
    }

    fn to_postgresdb_model(&self) -> AdminCredentialPostgresModel {
        AdminCredentialPostgresModel::new(&self.id, &self.created_at, &self.password_hash)
    }

    fn from_sqlitedb_model(model: &AdminCredentialSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            password_hash: model.password_hash().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> AdminCredentialSqliteModel {
        AdminCredentialSqliteModel::new(&self.id, &self.created_at, &self.password_hash)
    }
}
