use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::page_view::PageViewModel};

const INSERT: &str =
    "INSERT INTO \"page_views\" (\"id\", \"created_at\", \"path\") VALUES (?, ?, ?)";
const COUNT: &str = "SELECT COUNT(1) FROM \"page_views\"";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    dv_log::info(Some("🔧"), "[SQLite] Setting up page_views table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"page_views\" (\"id\" blob, \"created_at\" datetime, \"path\" text NOT NULL, PRIMARY KEY (\"id\"))").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(COUNT).await?;

    Ok(())
}

impl SqliteDb {
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
