//! Error types shared by the portal core

/// Errors raised by a [`KeyValueStorage`](crate::storage::KeyValueStorage) backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend unavailable: {message}")]
    Unavailable { message: String },

    #[error("Storage write rejected for key '{key}': {message}")]
    WriteRejected { key: String, message: String },
}

impl StorageError {
    /// Create an unavailable-backend error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a rejected-write error
    pub fn write_rejected(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteRejected {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Reasons a token could not be decoded into claims
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token must have three dot-separated segments, found {segments}")]
    MalformedLayout { segments: usize },

    #[error("Token payload is not valid base64url: {message}")]
    InvalidEncoding { message: String },

    #[error("Token payload is not valid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Token payload is not a JSON object")]
    NotAnObject,
}

impl From<base64::DecodeError> for TokenError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidEncoding {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson {
            message: err.to_string(),
        }
    }
}

/// Problems detected while building a route table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("Route table is empty")]
    Empty,

    #[error("Route path '{path}' must start with '/'")]
    InvalidPath { path: String },

    #[error("Duplicate route path: {path}")]
    DuplicatePath { path: String },

    #[error("Duplicate route name: {name}")]
    DuplicateName { name: String },

    #[error("Route '{name}' requires admin but not authentication")]
    AdminWithoutAuth { name: String },
}

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Result type for token decoding
pub type TokenResult<T> = std::result::Result<T, TokenError>;
