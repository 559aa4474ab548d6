use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, Utc};
use dv_db_postgresql::model::project::ProjectModel as ProjectPostgresModel;
use dv_db_sqlite::model::project::ProjectModel as ProjectSqliteModel;
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::Db;

pub struct ProjectDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    title: String,
    description: String,
    category: ProjectCategory,
    image_url: Option<String>,
    technologies: Vec<String>,
    features: Vec<String>,
    demo_url: Option<String>,
}

impl ProjectDao {
    pub fn new(
        title: &str,
        description: &str,
        category: &ProjectCategory,
        image_url: &Option<String>,
        technologies: &[String],
        features: &[String],
        demo_url: &Option<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            created_at: Utc::now(),
            title: title.to_owned(),
            description: description.to_owned(),
            category: *category,
            image_url: image_url.clone(),
            technologies: technologies.to_vec(),
            features: features.to_vec(),
            demo_url: demo_url.clone(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &ProjectCategory {
        &self.category
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
    }

    pub fn technologies(&self) -> &Vec<String> {
        &self.technologies
    }

    pub fn features(&self) -> &Vec<String> {
        &self.features
    }

    pub fn demo_url(&self) -> &Option<String> {
        &self.demo_url
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    pub fn set_category(&mut self, category: &ProjectCategory) {
        self.category = *category;
    }

    pub fn set_image_url(&mut self, image_url: &Option<String>) {
        self.image_url = image_url.clone();
    }

    pub fn set_technologies(&mut self, technologies: &[String]) {
        self.technologies = technologies.to_vec();
    }

    pub fn set_features(&mut self, features: &[String]) {
        self.features = features.to_vec();
    }

    pub fn set_demo_url(&mut self, demo_url: &Option<String>) {
        self.demo_url = demo_url.clone();
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_project(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_project(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Option<Self>> {
        match db {
            Db::PostgresqlDb(db) => match db.select_project(id).await? {
                Some(model) => Ok(Some(Self::from_postgresdb_model(&model)?)),
                None => Ok(None),
            },
            Db::SqliteDb(db) => match db.select_project(id).await? {
                Some(model) => Ok(Some(Self::from_sqlitedb_model(&model)?)),
                None => Ok(None),
            },
        }
    }

    /// Newest first, optionally restricted to one category.
    pub async fn db_select_many(
        db: &Db,
        category: &Option<ProjectCategory>,
    ) -> Result<Vec<Self>> {
        let category = category.map(|category| category.to_string());
        match db {
            Db::PostgresqlDb(db) => {
                let projects = db.select_many_projects(&category).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_postgresdb_model(project)?);
                }
                Ok(projects_data)
            }
            Db::SqliteDb(db) => {
                let projects = db.select_many_projects(&category).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project)?);
                }
                Ok(projects_data)
            }
        }
    }

    /// Returns `false` when the row no longer exists.
    pub async fn db_update(&self, db: &Db) -> Result<bool> {
        match db {
            Db::PostgresqlDb(db) => db.update_project(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_project(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_project(id).await,
            Db::SqliteDb(db) => db.delete_project(id).await,
        }
    }

    fn from_postgresdb_model(model: &ProjectPostgresModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            title: model.title().to_owned(),
            description: model.description().to_owned(),
            category: ProjectCategory::from_str(model.category())?,
            image_url: model.image_url().clone(),
            technologies: model.technologies().0.clone(),
            features: model.features().0.clone(),
            demo_url: model.demo_url().clone(),
        })
    }

    fn to_postgresdb_model(&self) -> ProjectPostgresModel {
        ProjectPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.title,
            &self.description,
            &self.category.to_string(),
            &self.image_url,
            &self.technologies,
            &self.features,
            &self.demo_url,
        )
    }

    fn from_sqlitedb_model(model: &ProjectSqliteModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            title: model.title().to_owned(),
            description: model.description().to_owned(),
            category: ProjectCategory::from_str(model.category())?,
            image_url: model.image_url().clone(),
            technologies: model.technologies().0.clone(),
            features: model.features().0.clone(),
            demo_url: model.demo_url().clone(),
        })
    }

    fn to_sqlitedb_model(&self) -> ProjectSqliteModel {
        ProjectSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.title,
            &self.description,
            &self.category.to_string(),
            &self.image_url,
            &self.technologies,
            &self.features,
            &self.demo_url,
        )
    }
}

#[derive(EnumString, Display, Clone, Copy, PartialEq, Eq, Debug)]
#[strum(serialize_all = "snake_case")]
pub enum ProjectCategory {
    Student,
    Business,
}
