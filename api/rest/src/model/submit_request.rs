use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::request::RequestResJson;

#[derive(Deserialize)]
pub struct SubmitRequestReqJson {
    request: Option<RequestReqJson>,
}

impl SubmitRequestReqJson {
    pub fn request(&self) -> &Option<RequestReqJson> {
        &self.request
    }
}

/// A visitor's request form. Either an email or a phone number must be given.
#[derive(Deserialize, Validate)]
#[validate(schema(function = "validate_contact", skip_on_field_errors = false))]
pub struct RequestReqJson {
    #[validate(required, length(min = 1))]
    request_type: Option<String>,
    #[validate(required, length(min = 1))]
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    project_id: Option<String>,
    #[validate(required, length(min = 1))]
    details: Option<String>,
    company_name: Option<String>,
}

impl RequestReqJson {
    pub fn request_type(&self) -> &Option<String> {
        &self.request_type
    }

    pub fn name(&self) -> &Option<String> {
        &self.name
    }

    pub fn email(&self) -> &Option<String> {
        &self.email
    }

    pub fn phone(&self) -> &Option<String> {
        &self.phone
    }

    pub fn project_id(&self) -> &Option<String> {
        &self.project_id
    }

    pub fn details(&self) -> &Option<String> {
        &self.details
    }

    pub fn company_name(&self) -> &Option<String> {
        &self.company_name
    }
}

fn validate_contact(request: &RequestReqJson) -> Result<(), ValidationError> {
    let given = |value: &Option<String>| value.as_ref().is_some_and(|value| !value.is_empty());
    if given(&request.email) || given(&request.phone) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

/// Names every field that failed validation, e.g.
/// `Missing required fields: details, name`.
pub fn missing_fields_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| match field.to_string() {
            field if field == "__all__" => "email".to_owned(),
            field => field,
        })
        .collect();
    fields.sort();
    fields.dedup();
    format!("Missing required fields: {}", fields.join(", "))
}

#[derive(Serialize)]
pub struct SubmitRequestResJson {
    success: bool,
    request: RequestResJson,
}

impl SubmitRequestResJson {
    pub fn new(request: RequestResJson) -> Self {
        Self {
            success: true,
            request,
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::{missing_fields_message, RequestReqJson};

    fn request(json: serde_json::Value) -> RequestReqJson {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn phone_alone_is_enough_contact() {
        let request = request(serde_json::json!({
            "request_type": "graduation",
            "name": "Ali",
            "phone": "0770000000",
            "details": "Need a thesis app",
        }));

        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_contact_is_reported_as_email() {
        let request = request(serde_json::json!({
            "request_type": "trial",
            "name": "Sara",
            "email": "",
            "phone": "",
            "details": "Demo please",
        }));

        let errors = request.validate().unwrap_err();
        assert_eq!(
            missing_fields_message(&errors),
            "Missing required fields: email"
        );
    }

    #[test]
    fn every_missing_field_is_named() {
        let request = request(serde_json::json!({
            "request_type": "trial",
            "name": "",
            "email": "sara@example.com",
        }));

        let errors = request.validate().unwrap_err();
        assert_eq!(
            missing_fields_message(&errors),
            "Missing required fields: details, name"
        );
    }
}
