use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{
    db::PostgresDb,
    model::project_request::{ProjectRequestModel, ProjectRequestWithProjectModel},
};

const INSERT: &str = "INSERT INTO \"project_requests\" (\"id\", \"created_at\", \"request_type\", \"name\", \"email\", \"phone\", \"project_id\", \"details\", \"company_name\", \"is_read\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)";
const SELECT_MANY_WITH_PROJECT: &str = "SELECT \"r\".\"id\", \"r\".\"created_at\", \"r\".\"request_type\", \"r\".\"name\", \"r\".\"email\", \"r\".\"phone\", \"r\".\"project_id\", \"r\".\"details\", \"r\".\"company_name\", \"r\".\"is_read\", \"p\".\"id\" AS \"joined_project_id\", \"p\".\"title\" AS \"joined_project_title\", \"p\".\"category\" AS \"joined_project_category\" FROM \"project_requests\" AS \"r\" LEFT JOIN \"projects\" AS \"p\" ON \"p\".\"id\" = \"r\".\"project_id\" ORDER BY \"r\".\"created_at\" DESC, \"r\".\"id\" DESC";
const SELECT_MANY_WITH_PROJECT_PAGED: &str = "SELECT \"r\".\"id\", \"r\".\"created_at\", \"r\".\"request_type\", \"r\".\"name\", \"r\".\"email\", \"r\".\"phone\", \"r\".\"project_id\", \"r\".\"details\", \"r\".\"company_name\", \"r\".\"is_read\", \"p\".\"id\" AS \"joined_project_id\", \"p\".\"title\" AS \"joined_project_title\", \"p\".\"category\" AS \"joined_project_category\" FROM \"project_requests\" AS \"r\" LEFT JOIN \"projects\" AS \"p\" ON \"p\".\"id\" = \"r\".\"project_id\" ORDER BY \"r\".\"created_at\" DESC, \"r\".\"id\" DESC LIMIT $1 OFFSET $2";
const COUNT: &str = "SELECT COUNT(1) FROM \"project_requests\"";
const MARK_READ: &str = "UPDATE \"project_requests\" SET \"is_read\" = TRUE WHERE \"id\" = $1";
const DELETE: &str = "DELETE FROM \"project_requests\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) -> Result<()> {
    dv_log::info(Some("🔧"), "[PostgreSQL] Setting up project_requests table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"project_requests\" (\"id\" uuid, \"created_at\" timestamptz(6), \"request_type\" text NOT NULL, \"name\" text NOT NULL, \"email\" text, \"phone\" text, \"project_id\" uuid, \"details\" text NOT NULL, \"company_name\" text, \"is_read\" boolean NOT NULL DEFAULT FALSE, PRIMARY KEY (\"id\"))").await?;

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT_MANY_WITH_PROJECT),
        pool.prepare(SELECT_MANY_WITH_PROJECT_PAGED),
        pool.prepare(COUNT),
        pool.prepare(MARK_READ),
        pool.prepare(DELETE),
    )?;

    Ok(())
}

impl PostgresDb {
    pub async fn insert_project_request(&self, value: &ProjectRequestModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.request_type())
                .bind(value.name())
                .bind(value.email())
                .bind(value.phone())
                .bind(value.project_id())
                .bind(value.details())
                .bind(value.company_name())
                .bind(value.is_read()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_many_project_requests_with_project(
        &self,
        limit: &Option<i64>,
        offset: &Option<i64>,
    ) -> Result<Vec<ProjectRequestWithProjectModel>> {
        match limit {
            Some(limit) => Ok(self
                .fetch_all(
                    sqlx::query_as(SELECT_MANY_WITH_PROJECT_PAGED)
                        .bind(limit)
                        .bind(offset.unwrap_or(0)),
                )
                .await?),
            None => Ok(self
                .fetch_all(sqlx::query_as(SELECT_MANY_WITH_PROJECT))
                .await?),
        }
    }

    pub async fn count_project_requests(&self) -> Result<i64> {
        Ok(self.fetch_one::<(i64,)>(sqlx::query_as(COUNT)).await?.0)
    }

    pub async fn update_project_request_mark_read(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(MARK_READ).bind(id)).await?;
        Ok(())
    }

    pub async fn delete_project_request(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
