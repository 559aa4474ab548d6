use anyhow::Result;
use chrono::{DateTime, Utc};
use dv_db_postgresql::model::page_view::PageViewModel as PageViewPostgresModel;
use dv_db_sqlite::model::page_view::PageViewModel as PageViewSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct PageViewDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    path: String,
}

impl PageViewDao {
    pub fn new(path: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            created_at: Utc::now(),
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

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_page_view(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_page_view(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_count(db: &Db) -> Result<i64> {
        match db {
            Db::PostgresqlDb(db) => db.count_page_views().await,
            Db::SqliteDb(db) => db.count_page_views().await,
        }
    }

    fn to_postgresdb_model(&self) -> PageViewPostgresModel {
        PageViewPostgresModel::new(&self.id, &self.created_at, &self.path)
    }

    fn to_sqlitedb_model(&self) -> PageViewSqliteModel {
        PageViewSqliteModel::new(&self.id, &self.created_at, &self.path)
    }
}
