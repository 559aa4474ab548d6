use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};

use crate::{db::PostgresDb, model::page_view::PageViewModel};

const INSERT: &str =
    "INSERT INTO \"page_views\" (\"id\", \"created_at\", \"path\") VALUES ($1, $2, $3)";
const COUNT: &str = "SELECT COUNT(1) FROM \"page_views\"";

pub async fn init(pool: &Pool<Postgres>) -> Result<()> {
    dv_log::info(Some("🔧"), "[PostgreSQL] Setting up page_views table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"page_views\" (\"id\" uuid, \"created_at\" timestamptz(6), \"path\" text NOT NULL, PRIMARY KEY (\"id\"))").await?;

    tokio::try_join!(pool.prepare(INSERT), pool.prepare(COUNT))?;

    Ok(())
}

impl PostgresDb {
    pub async fn insert_page_view(&self, value: &PageViewModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.path()),
        )
        .await?;
        Ok(())
    }

    pub async fn count_page_views(&self) -> Result<i64> {
        Ok(self.fetch_one::<(i64,)>(sqlx::query_as(COUNT)).await?.0)
    }
}
