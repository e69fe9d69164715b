use thiserror::Error;

/// Client-side errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-success response.
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
        errors: Option<String>,
    },

    /// Network or body decoding failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Base URL could not be parsed
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Message the server supplied, with field errors appended when present.
    /// `None` when the failure never produced a readable server message.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ClientError::Api {
                message: Some(message),
                errors: Some(errors),
                ..
            } => Some(format!("{message}: {errors}")),
            ClientError::Api {
                message: Some(message),
                ..
            } => Some(message.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_includes_field_errors() {
        let err = ClientError::Api {
            status: 400,
            message: Some("Validation failed".into()),
            errors: Some("email: Invalid email".into()),
        };

        assert_eq!(
            err.server_message().as_deref(),
            Some("Validation failed: email: Invalid email")
        );
    }

    #[test]
    fn server_message_absent_without_body() {
        let err = ClientError::Api {
            status: 502,
            message: None,
            errors: None,
        };

        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "API error 502: no message");
    }
}
