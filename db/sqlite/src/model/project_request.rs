use sqlx::{
    prelude::FromRow,
    types::chrono::{DateTime, Utc},
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct ProjectRequestModel {
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

impl ProjectRequestModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        request_type: &str,
        name: &str,
        email: &Option<String>,
        phone: &Option<String>,
        project_id: &Option<Uuid>,
        details: &str,
        company_name: &Option<String>,
        is_read: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            request_type: request_type.to_owned(),
            name: name.to_owned(),
            email: email.clone(),
            phone: phone.clone(),
            project_id: *project_id,
            details: details.to_owned(),
            company_name: company_name.clone(),
            is_read: *is_read,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn request_type(&self) -> &str {
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
}

/// A request row left-joined with the title and category of its project.
#[derive(FromRow)]
pub struct ProjectRequestWithProjectModel {
    #[sqlx(flatten)]
    request: ProjectRequestModel,
    joined_project_id: Option<Uuid>,
    joined_project_title: Option<String>,
    joined_project_category: Option<String>,
}

impl ProjectRequestWithProjectModel {
    pub fn request(&self) -> &ProjectRequestModel {
        &self.request
    }

    pub fn joined_project_id(&self) -> &Option<Uuid> {
        &self.joined_project_id
    }

    pub fn joined_project_title(&self) -> &Option<String> {
        &self.joined_project_title
    }

    pub fn joined_project_category(&self) -> &Option<String> {
        &self.joined_project_category
    }
}
