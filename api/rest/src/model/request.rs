use chrono::{DateTime, Utc};
use dv_dao::project_request::{ProjectRefDao, ProjectRequestDao};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct RequestResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    request_type: String,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    project_id: Option<Uuid>,
    details: String,
    company_name: Option<String>,
    is_read: bool,
}

impl RequestResJson {
    pub fn from_dao(request: &ProjectRequestDao) -> Self {
        Self {
            id: *request.id(),
            created_at: *request.created_at(),
            request_type: request.request_type().to_string(),
            name: request.name().to_owned(),
            email: request.email().clone(),
            phone: request.phone().clone(),
            project_id: *request.project_id(),
            details: request.details().to_owned(),
            company_name: request.company_name().clone(),
            is_read: *request.is_read(),
        }
    }
}

/// A request as listed on the dashboard, with the referenced project under
/// `projects` (null when it does not exist).
#[derive(Serialize)]
pub struct RequestWithProjectResJson {
    #[serde(flatten)]
    request: RequestResJson,
    projects: Option<ProjectRefResJson>,
}

impl RequestWithProjectResJson {
    pub fn from_dao(request: &ProjectRequestDao, project: &Option<ProjectRefDao>) -> Self {
        Self {
            request: RequestResJson::from_dao(request),
            projects: project.as_ref().map(|project| ProjectRefResJson {
                id: *project.id(),
                title: project.title().to_owned(),
                category: project.category().to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
pub struct ProjectRefResJson {
    id: Uuid,
    title: String,
    category: String,
}
