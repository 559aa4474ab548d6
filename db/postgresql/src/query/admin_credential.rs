use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};

use crate::{db::PostgresDb, model::admin_credential::AdminCredentialModel};

const INSERT_IF_ABSENT: &str = "INSERT INTO \"admin_credentials\" (\"id\", \"created_at\", \"password_hash\", \"singleton\") VALUES ($1, $2, $3, TRUE) ON CONFLICT (\"singleton\") DO NOTHING";
const SELECT_FIRST: &str = "SELECT \"id\", \"created_at\", \"password_hash\" FROM \"admin_credentials\" LIMIT 1";

pub async fn init(pool: &Pool<Postgres>) -> Result<()> {
    dv_log::info(Some("🔧"), "[PostgreSQL] Setting up admin_credentials table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"admin_credentials\" (\"id\" uuid, \"created_at\" timestamptz(6), \"password_hash\" text NOT NULL, \"singleton\" boolean NOT NULL UNIQUE CHECK (\"singleton\"), PRIMARY KEY (\"id\"))").await?;

    tokio::try_join!(pool.prepare(INSERT_IF_ABSENT), pool.prepare(SELECT_FIRST))?;

    Ok(())
}

impl PostgresDb {
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
