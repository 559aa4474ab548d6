use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::project::ProjectModel};

const INSERT: &str = "INSERT INTO \"projects\" (\"id\", \"created_at\", \"title\", \"description\", \"category\", \"image_url\", \"technologies\", \"features\", \"demo_url\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"title\", \"description\", \"category\", \"image_url\", \"technologies\", \"features\", \"demo_url\" FROM \"projects\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"title\", \"description\", \"category\", \"image_url\", \"technologies\", \"features\", \"demo_url\" FROM \"projects\" ORDER BY \"created_at\" DESC, \"id\" DESC";
const SELECT_MANY_BY_CATEGORY: &str = "SELECT \"id\", \"created_at\", \"title\", \"description\", \"category\", \"image_url\", \"technologies\", \"features\", \"demo_url\" FROM \"projects\" WHERE \"category\" = $1 ORDER BY \"created_at\" DESC, \"id\" DESC";
const UPDATE: &str = "UPDATE \"projects\" SET \"title\" = $1, \"description\" = $2, \"category\" = $3, \"image_url\" = $4, \"technologies\" = $5, \"features\" = $6, \"demo_url\" = $7 WHERE \"id\" = $8";
const DELETE: &str = "DELETE FROM \"projects\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) -> Result<()> {
    dv_log::info(Some("🔧"), "[PostgreSQL] Setting up projects table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"projects\" (\"id\" uuid, \"created_at\" timestamptz(6), \"title\" text NOT NULL, \"description\" text NOT NULL, \"category\" text NOT NULL, \"image_url\" text, \"technologies\" jsonb NOT NULL, \"features\" jsonb NOT NULL, \"demo_url\" text, PRIMARY KEY (\"id\"))").await?;

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_MANY),
        pool.prepare(SELECT_MANY_BY_CATEGORY),
        pool.prepare(UPDATE),
        pool.prepare(DELETE),
    )?;

    Ok(())
}

impl PostgresDb {
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
