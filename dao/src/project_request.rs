use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, Utc};
use dv_db_postgresql::model::project_request::{
    ProjectRequestModel as ProjectRequestPostgresModel,
    ProjectRequestWithProjectModel as ProjectRequestWithProjectPostgresModel,
};
use dv_db_sqlite::model::project_request::{
    ProjectRequestModel as ProjectRequestSqliteModel,
    ProjectRequestWithProjectModel as ProjectRequestWithProjectSqliteModel,
};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::{project::ProjectCategory, Db};

/// A visitor's request for a trial or a graduation project.
pub struct ProjectRequestDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    request_type: RequestType,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    project_id: Option<Uuid>,
    details: String,
    company_name: Option<String>,
    is_read: bool,
}

impl ProjectRequestDao {
    pub fn new(
        request_type: &RequestType,
        name: &str,
        email: &Option<String>,
        phone: &Option<String>,
        project_id: &Option<Uuid>,
        details: &str,
        company_name: &Option<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            created_at: Utc::now(),
            request_type: *request_type,
            name: name.to_owned(),
            email: email.clone(),
            phone: phone.clone(),
            project_id: *project_id,
            details: details.to_owned(),
            company_name: company_name.clone(),
            is_read: false,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn request_type(&self) -> &RequestType {
        &self.request_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Option<String> {
        &self.email
    }

    pub fn phone(&self) -> &Option<String> {
        &self.phone
    }

    pub fn project_id(&self) -> &Option<Uuid> {
        &self.project_id
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn company_name(&self) -> &Option<String> {
        &self.company_name
    }

    pub fn is_read(&self) -> &bool {
        &self.is_read
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => {
                db.insert_project_request(&self.to_postgresdb_model())
                    .await
            }
            Db::SqliteDb(db) => db.insert_project_request(&self.to_sqlitedb_model()).await,
        }
    }

    /// Newest first, each with the project it references when that project
    /// still exists. Without a limit every request is returned.
    pub async fn db_select_many_with_project(
        db: &Db,
        limit: &Option<i64>,
        offset: &Option<i64>,
    ) -> Result<Vec<(Self, Option<ProjectRefDao>)>> {
        match db {
            Db::PostgresqlDb(db) => {
                let requests = db
                    .select_many_project_requests_with_project(limit, offset)
                    .await?;
                let mut requests_data = Vec::with_capacity(requests.len());
                for request in &requests {
                    requests_data.push(Self::from_postgresdb_joined_model(request)?);
                }
                Ok(requests_data)
            }
            Db::SqliteDb(db) => {
                let requests = db
                    .select_many_project_requests_with_project(limit, offset)
                    .await?;
                let mut requests_data = Vec::with_capacity(requests.len());
                for request in &requests {
                    requests_data.push(Self::from_sqlitedb_joined_model(request)?);
                }
                Ok(requests_data)
            }
        }
    }

    pub async fn db_count(db: &Db) -> Result<i64> {
        match db {
            Db::PostgresqlDb(db) => db.count_project_requests().await,
            Db::SqliteDb(db) => db.count_project_requests().await,
        }
    }

    pub async fn db_mark_read(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.update_project_request_mark_read(id).await,
            Db::SqliteDb(db) => db.update_project_request_mark_read(id).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_project_request(id).await,
            Db::SqliteDb(db) => db.delete_project_request(id).await,
        }
    }

    fn from_postgresdb_model(model: &ProjectRequestPostgresModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            request_type: RequestType::from_str(model.request_type())?,
            name: model.name().to_owned(),
            email: model.email().clone(),
            phone: model.phone().clone(),
            project_id: *model.project_id(),
            details: model.details().to_owned(),
            company_name: model.company_name().clone(),
            is_read: *model.is_read(),
        })
    }

    fn from_postgresdb_joined_model(
        model: &ProjectRequestWithProjectPostgresModel,
    ) -> Result<(Self, Option<ProjectRefDao>)> {
        let project = match (
            model.joined_project_id(),
            model.joined_project_title(),
            model.joined_project_category(),
        ) {
            (Some(id), Some(title), Some(category)) => {
                Some(ProjectRefDao::new(id, title, category)?)
            }
            _ => None,
        };
        Ok((Self::from_postgresdb_model(model.request())?, project))
    }

    fn to_postgresdb_model(&self) -> ProjectRequestPostgresModel {
        ProjectRequestPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.request_type.to_string(),
            &self.name,
            &self.email,
            &self.phone,
            &self.project_id,
            &self.details,
            &self.company_name,
            &self.is_read,
        )
    }

    fn from_sqlitedb_model(model: &ProjectRequestSqliteModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            request_type: RequestType::from_str(model.request_type())?,
            name: model.name().to_owned(),
            email: model.email().clone(),
            phone: model.phone().clone(),
            project_id: *model.project_id(),
            details: model.details().to_owned(),
            company_name: model.company_name().clone(),
            is_read: *model.is_read(),
        })
    }

    fn from_sqlitedb_joined_model(
        model: &ProjectRequestWithProjectSqliteModel,
    ) -> Result<(Self, Option<ProjectRefDao>)> {
        let project = match (
            model.joined_project_id(),
            model.joined_project_title(),
            model.joined_project_category(),
        ) {
            (Some(id), Some(title), Some(category)) => {
                Some(ProjectRefDao::new(id, title, category)?)
            }
            _ => None,
        };
        Ok((Self::from_sqlitedb_model(model.request())?, project))
    }

    fn to_sqlitedb_model(&self) -> ProjectRequestSqliteModel {
        ProjectRequestSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.request_type.to_string(),
            &self.name,
            &self.email,
            &self.phone,
            &self.project_id,
            &self.details,
            &self.company_name,
            &self.is_read,
        )
    }
}

#[derive(EnumString, Display, Clone, Copy, PartialEq, Eq, Debug)]
#[strum(serialize_all = "snake_case")]
pub enum RequestType {
    Trial,
    Graduation,
}

/// The slice of a project shown next to a request.
pub struct ProjectRefDao {
    id: Uuid,
    title: String,
    category: ProjectCategory,
}

impl ProjectRefDao {
    fn new(id: &Uuid, title: &str, category: &str) -> Result<Self> {
        Ok(Self {
            id: *id,
            title: title.to_owned(),
            category: ProjectCategory::from_str(category)?,
        })
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &ProjectCategory {
        &self.category
    }
}
