use sqlx::{
    prelude::FromRow,
    types::{
        chrono::{DateTime, Utc},
        Json,
    },
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct ProjectModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    title: String,
    description: String,
    category: String,
    image_url: Option<String>,
    technologies: Json<Vec<String>>,
    features: Json<Vec<String>>,
    demo_url: Option<String>,
}

impl ProjectModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        title: &str,
        description: &str,
        category: &str,
        image_url: &Option<String>,
        technologies: &[String],
        features: &[String],
        demo_url: &Option<String>,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            title: title.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
            image_url: image_url.clone(),
            technologies: Json(technologies.to_vec()),
            features: Json(features.to_vec()),
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

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
    }

    pub fn technologies(&self) -> &Json<Vec<String>> {
        &self.technologies
    }

    pub fn features(&self) -> &Json<Vec<String>> {
        &self.features
    }

    pub fn demo_url(&self) -> &Option<String> {
        &self.demo_url
    }
}
