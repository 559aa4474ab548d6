use thiserror::Error;

/// Failures surfaced to API callers. Each variant maps to one HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    ValidationError(String),

    #[error("Admin password already set up")]
    AlreadySetup,

    #[error("Admin not set up")]
    NotSetup,

    #[error("Invalid password")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthorized(String),

    #[error("Image fetch/upload failed")]
    ImageIngestFailed,

    #[error("Invalid action")]
    InvalidAction,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnknownError(String),
}

impl Error {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError(_)
            | Self::AlreadySetup
            | Self::NotSetup
            | Self::ImageIngestFailed
            | Self::InvalidAction => 400,
            Self::InvalidCredentials | Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::UnknownError(_) => 500,
        }
    }
}

/// Storage and database failures carry no caller-facing meaning.
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::UnknownError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn auth_preconditions_map_to_client_errors() {
        assert_eq!(Error::AlreadySetup.status_code(), 400);
        assert_eq!(Error::NotSetup.status_code(), 400);
        assert_eq!(Error::InvalidCredentials.status_code(), 401);
    }

    #[test]
    fn unknown_error_is_a_server_error() {
        let err = Error::UnknownError("connection reset".to_owned());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn messages_match_the_dashboard_wording() {
        assert_eq!(Error::InvalidAction.to_string(), "Invalid action");
        assert_eq!(
            Error::ImageIngestFailed.to_string(),
            "Image fetch/upload failed"
        );
    }
}
