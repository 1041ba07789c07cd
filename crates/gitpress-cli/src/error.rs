//! CLI error types with exit code handling
//!
//! Unifies core and publisher errors into a single diagnostic type that
//! maps each failure class to an exit code.

use miette::Diagnostic;
use thiserror::Error;

use gitpress_core::CoreError;
use gitpress_github::PublishError;

use crate::exit_codes;

/// CLI-specific error type that maps failures to exit codes
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Missing or malformed configuration
    #[error("Configuration error: {message}")]
    #[diagnostic(code(gitpress::cli::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Post file could not be loaded or parsed
    #[error("Post error: {message}")]
    #[diagnostic(code(gitpress::cli::post))]
    Post { message: String },

    /// Remote operation failed
    #[error("GitHub error: {message}")]
    #[diagnostic(code(gitpress::cli::remote))]
    Remote {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(gitpress::cli::io))]
    Io { message: String },

    /// Invalid arguments
    #[error("{message}")]
    #[diagnostic(code(gitpress::cli::usage))]
    Usage { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config { .. } => exit_codes::CONFIG_ERROR,
            CliError::Post { .. } => exit_codes::POST_ERROR,
            CliError::Remote { .. } => exit_codes::REMOTE_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
            CliError::Usage { .. } => exit_codes::USAGE_ERROR,
        }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a remote error with help text
    pub fn remote_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

impl From<PublishError> for CliError {
    fn from(err: PublishError) -> Self {
        match &err {
            PublishError::NotConfigured { .. } | PublishError::InvalidRepoSpec { .. } => {
                CliError::Config {
                    message: err.to_string(),
                    help: Some(
                        "run `gitpress setup --repo <owner/repo>` or set GITHUB_TOKEN and GITHUB_REPO"
                            .to_string(),
                    ),
                }
            }
            PublishError::AuthRequired { .. } | PublishError::AuthFailed { .. } => CliError::Remote {
                message: err.to_string(),
                help: Some("check that the token is valid and has contents write access".to_string()),
            },
            PublishError::Io(_) => CliError::Io {
                message: err.to_string(),
            },
            _ => CliError::Remote {
                message: err.to_string(),
                help: None,
            },
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::Io(_) => CliError::Io {
                message: err.to_string(),
            },
            _ => CliError::Post {
                message: err.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
