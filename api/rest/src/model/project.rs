use chrono::{DateTime, Utc};
use dv_dao::project::ProjectDao;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editable fields of a project as sent by the dashboard. Extra fields such
/// as `id` or `created_at` are ignored.
#[derive(Deserialize)]
pub struct ProjectReqJson {
    title: String,
    description: String,
    category: String,
    image_url: Option<String>,
    #[serde(default)]
    technologies: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
    demo_url: Option<String>,
}

impl ProjectReqJson {
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

    pub fn technologies(&self) -> &Vec<String> {
        &self.technologies
    }

    pub fn features(&self) -> &Vec<String> {
        &self.features
    }

    pub fn demo_url(&self) -> &Option<String> {
        &self.demo_url
    }
}

#[derive(Serialize)]
pub struct ProjectResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    title: String,
    description: String,
    category: String,
    image_url: Option<String>,
    technologies: Vec<String>,
    features: Vec<String>,
    demo_url: Option<String>,
}

impl ProjectResJson {
    pub fn from_dao(project: &ProjectDao) -> Self {
        Self {
            id: *project.id(),
            created_at: *project.created_at(),
            title: project.title().to_owned(),
            description: project.description().to_owned(),
            category: project.category().to_string(),
            image_url: project.image_url().clone(),
            technologies: project.technologies().clone(),
            features: project.features().clone(),
            demo_url: project.demo_url().clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ProjectListResJson {
    projects: Vec<ProjectResJson>,
}

impl ProjectListResJson {
    pub fn new(projects: &[ProjectDao]) -> Self {
        Self {
            projects: projects.iter().map(ProjectResJson::from_dao).collect(),
        }
    }
}
