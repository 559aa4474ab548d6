use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::project::ProjectModel};

const INSERT: &str = "INSERT INTO \"projects\" (\"id\", \"created_at\", \"title\", \"description\", \"category\", \"image_url\", \"technologies\", \"features\", \"demo_url\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"title\", \"description\", \"category\", \"image_url\", \"technologies\", \"features\", \"demo_url\" FROM \"projects\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"title\", \"description\", \"category\", \"image_url\", \"technologies\", \"features\", \"demo_url\" FROM \"projects\" ORDER BY \"created_at\" DESC, \"id\" DESC";
const SELECT_MANY_BY_CATEGORY: &str = "SELECT \"id\", \"created_at\", \"title\", \"description\", \"category\", \"image_url\", \"technologies\", \"features\", \"demo_url\" FROM \"projects\" WHERE \"category\" = ? ORDER BY \"created_at\" DESC, \"id\" DESC";
const UPDATE: &str = "UPDATE \"projects\" SET \"title\" = ?, \"description\" = ?, \"category\" = ?, \"image_url\" = ?, \"technologies\" = ?, \"features\" = ?, \"demo_url\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"projects\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    dv_log::info(Some("🔧"), "[SQLite] Setting up projects table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"projects\" (\"id\" blob, \"created_at\" datetime, \"title\" text NOT NULL, \"description\" text NOT NULL, \"category\" text NOT NULL, \"image_url\" text, \"technologies\" text NOT NULL, \"features\" text NOT NULL, \"demo_url\" text, PRIMARY KEY (\"id\"))").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_MANY).await?;
    pool.prepare(SELECT_MANY_BY_CATEGORY).await?;
    pool.prepare(UPDATE).await?;
    pool.prepare(DELETE).await?;

    Ok(())
}

impl SqliteDb {
    pub async fn insert_project(&self, value: &ProjectModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.title())
                .bind(value.description())
                .bind(value.category())
                .bind(value.image_url())
                .bind(value.technologies())
                .bind(value.features())
                .bind(value.demo_url()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_project(&self, id: &Uuid) -> Result<Option<ProjectModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_projects(
        &self,
        category: &Option<String>,
    ) -> Result<Vec<ProjectModel>> {
        match category {
            Some(category) => Ok(self
                .fetch_all(sqlx::query_as(SELECT_MANY_BY_CATEGORY).bind(category))
                .await?),
            None => Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?),
        }
    }

    /// Returns `false` when no row has the given id.
    pub async fn update_project(&self, value: &ProjectModel) -> Result<bool> {
        let result = self
            .execute(
                sqlx::query(UPDATE)
                    .bind(value.title())
                    .bind(value.description())
                    .bind(value.category())
                    .bind(value.image_url())
                    .bind(value.technologies())
                    .bind(value.features())
                    .bind(value.demo_url())
                    .bind(value.id()),
            )
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_project(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
