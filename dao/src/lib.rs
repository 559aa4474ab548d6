use dv_db_postgresql::db::PostgresDb;
use dv_db_sqlite::db::SqliteDb;

pub mod admin_credential;
pub mod page_view;
pub mod project;
pub mod project_request;

pub enum Db {
    PostgresqlDb(PostgresDb),
    SqliteDb(SqliteDb),
}
