//! Error types for publishing operations

use thiserror::Error;

/// Errors surfaced by the GitHub publisher
#[derive(Debug, Error)]
pub enum PublishError {
    // ============ Configuration Errors ============
    #[error("GitHub publishing is not configured: {message}")]
    NotConfigured { message: String },

    #[error("Invalid repository spec: {spec} (expected owner/repo)")]
    InvalidRepoSpec { spec: String },

    #[error("Invalid API URL: {url} - {reason}")]
    InvalidApiUrl { url: String, reason: String },

    // ============ Network Errors ============
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    // ============ Authentication Errors ============
    #[error("Authentication required for {url}")]
    AuthRequired { url: String },

    #[error("Access denied: {message}")]
    AuthFailed { message: String },

    // ============ Contents Errors ============
    #[error("File not found in repository: {path}")]
    FileNotFound { path: String },

    #[error("Write conflict on {path}: the file changed since it was read")]
    Conflict { path: String },

    // ============ IO Errors ============
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for publishing operations
pub type Result<T> = std::result::Result<T, PublishError>;

impl From<reqwest::Error> for PublishError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PublishError::Timeout { seconds: 30 }
        } else if e.is_connect() {
            PublishError::Network {
                message: format!("Connection failed: {}", e),
            }
        } else if let Some(status) = e.status() {
            PublishError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            PublishError::Network {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_yaml::Error> for PublishError {
    fn from(e: serde_yaml::Error) -> Self {
        PublishError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for PublishError {
    fn from(e: serde_json::Error) -> Self {
        PublishError::Serialization(e.to_string())
    }
}

impl From<url::ParseError> for PublishError {
    fn from(e: url::ParseError) -> Self {
        PublishError::InvalidApiUrl {
            url: String::new(),
            reason: e.to_string(),
        }
    }
}
