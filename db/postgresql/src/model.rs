pub mod admin_credential;
pub mod page_view;
pub mod project;
pub mod project_request;
