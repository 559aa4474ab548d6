pub mod admin_auth;
pub mod admin_project;
pub mod admin_request;
pub mod admin_stats;
pub mod admin_storage;
pub mod page_view;
pub mod portfolio;
pub mod preflight;
pub mod root;
pub mod submit_request;
