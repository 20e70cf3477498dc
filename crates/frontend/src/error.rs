//! Frontend error type

use portal_core::StorageError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("Response error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { status: 401, .. } => "Invalid email or password.".to_string(),
            Self::Http { message, .. } if !message.is_empty() => message.clone(),
            Self::Network(_) => "Could not reach the server. Please try again.".to_string(),
            Self::Storage(_) => "Your browser refused to store the session.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_credentials_message() {
        let err = AppError::Http {
            status: 401,
            message: "nope".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid email or password.");
    }

    #[test]
    fn server_message_is_preferred() {
        let err = AppError::Http {
            status: 503,
            message: "Maintenance window".to_string(),
        };
        assert_eq!(err.user_message(), "Maintenance window");

        let empty = AppError::Http {
            status: 503,
            message: String::new(),
        };
        assert_eq!(empty.user_message(), "Request failed (503): ");
    }

    #[test]
    fn storage_errors_convert() {
        let err: AppError = StorageError::unavailable("denied").into();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
