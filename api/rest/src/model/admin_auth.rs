use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAuthReqJson {
    #[serde(default)]
    action: String,
    password: Option<String>,
    new_password: Option<String>,
}

impl AdminAuthReqJson {
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn password(&self) -> &Option<String> {
        &self.password
    }

    pub fn new_password(&self) -> &Option<String> {
        &self.new_password
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSetupResJson {
    is_setup: bool,
}

impl CheckSetupResJson {
    pub fn new(is_setup: &bool) -> Self {
        Self {
            is_setup: *is_setup,
        }
    }
}

#[derive(Serialize)]
pub struct AuthTokenResJson {
    success: bool,
    token: String,
}

impl AuthTokenResJson {
    pub fn new(token: &str) -> Self {
        Self {
            success: true,
            token: token.to_owned(),
        }
    }
}
