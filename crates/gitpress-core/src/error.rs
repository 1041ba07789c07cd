//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Post file not found: {path}")]
    PostNotFound { path: String },

    #[error("Unsupported post format: {path} (expected .yaml, .yml or .md)")]
    UnsupportedFormat { path: String },

    #[error("Invalid front matter: {message}")]
    InvalidFrontMatter { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("Failed to parse post YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
