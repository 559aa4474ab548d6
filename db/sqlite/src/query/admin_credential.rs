use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::admin_credential::AdminCredentialModel};

// The UNIQUE "singleton" column turns the second setup into a no-op insert.
const INSERT_IF_ABSENT: &str = "INSERT INTO \"admin_credentials\" (\"id\", \"created_at\", \"password_hash\", \"singleton\") VALUES (?, ?, ?, 1) ON CONFLICT (\"singleton\") DO NOTHING";
const SELECT_FIRST: &str = "SELECT \"id\", \"created_at\", \"password_hash\" FROM \"admin_credentials\" LIMIT 1";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    dv_log::info(Some("🔧"), "[SQLite] Setting up admin_credentials table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"admin_credentials\" (\"id\" blob, \"created_at\" datetime, \"password_hash\" text NOT NULL, \"singleton\" integer NOT NULL UNIQUE CHECK (\"singleton\" = 1), PRIMARY KEY (\"id\"))").await?;

    pool.prepare(INSERT_IF_ABSENT).await?;
    pool.prepare(SELECT_FIRST).await?;

    Ok(())
}

impl SqliteDb {
    /// Returns `false` when a credential already exists.
    pub async fn insert_admin_credential_if_absent(
        &self,
        value: &AdminCredentialModel,
    ) -> Result<bool> {
        let result = self
            .execute(
                sqlx::query(INSERT_IF_ABSENT)
                    .bind(value.id())
                    .bind(value.created_at())
                    .bind(value.password_hash()),
            )
            .await?;
        Ok(result.rows_affected() == 1)
    }

    pub async fn select_admin_credential(&self) -> Result<Option<AdminCredentialModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT_FIRST)).await?)
    }
}
