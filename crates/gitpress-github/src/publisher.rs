//! Post publishing orchestration
//!
//! Maps posts onto repository paths and commit messages, and carries the
//! four caller-facing operations: save, delete, verify, repo info. Each
//! operation is at most two sequential round-trips (read token, then
//! write); concurrent publishers racing on one path lose at the API's
//! optimistic-concurrency check and see a conflict error.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use gitpress_core::{Post, front_matter, post_path};

use crate::client::GithubClient;
use crate::config::GithubConfig;
use crate::contents;
use crate::error::Result;

/// Repository metadata returned by [`Publisher::repo_info`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoInfo {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    pub default_branch: String,
    pub html_url: String,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Publishes posts to one repository on one branch.
pub struct Publisher {
    client: GithubClient,
}

impl Publisher {
    /// Build a publisher from a complete configuration.
    pub fn new(config: GithubConfig) -> Result<Self> {
        Ok(Self {
            client: GithubClient::new(config)?,
        })
    }

    pub fn config(&self) -> &GithubConfig {
        self.client.config()
    }

    /// Commit a post under its title-derived path and return that path.
    ///
    /// `is_new` only picks the commit-message prefix; create-vs-update on
    /// the remote side is decided by the version-token probe.
    pub async fn save_post(&self, post: &Post, is_new: bool) -> Result<String> {
        let path = post_path(&post.title);
        let document = front_matter::render(post);
        let prefix = if is_new { "feat" } else { "update" };
        let message = format!("{}: {}", prefix, post.title);

        contents::put_file(&self.client, &path, &document, &message).await?;
        tracing::info!(path = %path, "post published");
        Ok(path)
    }

    /// Delete a post's file and return its path. Deleting a post that is
    /// not in the repository is an error.
    pub async fn delete_post(&self, post: &Post) -> Result<String> {
        self.delete_title(&post.title).await
    }

    /// Delete by title alone; the path derivation is identical to save.
    pub async fn delete_title(&self, title: &str) -> Result<String> {
        let path = post_path(title);
        let message = format!("delete: {}", title);

        contents::delete_file(&self.client, &path, &message).await?;
        tracing::info!(path = %path, "post deleted");
        Ok(path)
    }

    /// Check that the token can read the repository. An HTTP rejection
    /// answers `false`; only transport failures are errors.
    pub async fn verify_credentials(&self) -> Result<bool> {
        let url = self.client.repo_url();
        let response = self.client.request(Method::GET, &url).send().await?;
        Ok(response.status().is_success())
    }

    /// Fetch repository metadata.
    pub async fn repo_info(&self) -> Result<RepoInfo> {
        let url = self.client.repo_url();
        let response = self.client.request(Method::GET, &url).send().await?;

        if !response.status().is_success() {
            return Err(self.client.error_for(&response, None));
        }
        Ok(response.json::<RepoInfo>().await?)
    }
}
