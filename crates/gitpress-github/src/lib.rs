//! Gitpress GitHub publisher
//!
//! Persists rendered posts into a GitHub repository through the REST
//! contents API: read the current version token, upsert or delete the file,
//! report the result. One repository, one branch, a bearer token read once
//! at startup and passed to the publisher by value.
//!
//! There is no retry policy anywhere: a failed write, including a lost
//! optimistic-concurrency race, surfaces as a single typed error.

pub mod client;
pub mod config;
pub mod contents;
pub mod error;
pub mod publisher;

pub use client::GithubClient;
pub use config::GithubConfig;
pub use contents::RemoteFile;
pub use error::{PublishError, Result};
pub use publisher::{Publisher, RepoInfo};
