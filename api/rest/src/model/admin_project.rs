use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::project::{ProjectReqJson, ProjectResJson};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProjectReqJson {
    #[serde(default)]
    action: String,
    project: Option<ProjectReqJson>,
    project_id: Option<Uuid>,
}

impl AdminProjectReqJson {
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn project(&self) -> &Option<ProjectReqJson> {
        &self.project
    }

    pub fn project_id(&self) -> &Option<Uuid> {
        &self.project_id
    }
}

#[derive(Serialize)]
pub struct ProjectSavedResJson {
    success: bool,
    project: ProjectResJson,
}

impl ProjectSavedResJson {
    pub fn new(project: ProjectResJson) -> Self {
        Self {
            success: true,
            project,
        }
    }
}
