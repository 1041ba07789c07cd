//! Publisher configuration
//!
//! Credentials load once at startup, either from
//! `~/.config/gitpress/config.yaml` or from the `GITHUB_TOKEN` /
//! `GITHUB_REPO` environment variables, and are passed to the publisher by
//! value. A publisher cannot be constructed from an incomplete config:
//! missing or malformed credentials are a typed error at load time.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PublishError, Result};

/// Default target branch.
pub const DEFAULT_BRANCH: &str = "main";

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variables honored by [`GithubConfig::from_env`].
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const REPO_VAR: &str = "GITHUB_REPO";

/// Everything the publisher needs to reach one repository on one branch.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Bearer token
    pub token: String,

    /// Repository owner (account or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Target branch for every commit
    pub branch: String,

    /// API base URL (overridable for tests and GitHub Enterprise)
    pub api_url: String,
}

/// On-disk config file: the two credential keys plus optional overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    token: String,

    /// Combined "owner/repo" spec
    repo: String,

    #[serde(default = "default_branch")]
    branch: String,

    #[serde(default = "default_api_url")]
    api_url: String,
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl GithubConfig {
    /// Build a config from a token and an "owner/repo" spec.
    pub fn new(token: impl Into<String>, repo_spec: &str, branch: Option<&str>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(PublishError::NotConfigured {
                message: "token is empty".to_string(),
            });
        }
        let (owner, repo) = split_repo_spec(repo_spec)?;

        Ok(Self {
            token,
            owner,
            repo,
            branch: branch.unwrap_or(DEFAULT_BRANCH).to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        })
    }

    /// Resolve configuration: an explicit file, the default file if it
    /// exists, then the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let default = Self::default_path()?;
        if default.exists() {
            Self::load_from(&default)
        } else {
            Self::from_env()
        }
    }

    /// Load from a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_yaml::from_str(&content)?;

        let mut config = Self::new(file.token, &file.repo, Some(file.branch.as_str()))?;
        config.api_url = file.api_url;
        Ok(config)
    }

    /// Load from `GITHUB_TOKEN` and `GITHUB_REPO`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_VAR).ok().filter(|v| !v.is_empty());
        let spec = std::env::var(REPO_VAR).ok().filter(|v| !v.is_empty());

        match (token, spec) {
            (Some(token), Some(spec)) => Self::new(token, &spec, None),
            _ => Err(PublishError::NotConfigured {
                message: format!("no config file, and {TOKEN_VAR} and {REPO_VAR} are not both set"),
            }),
        }
    }

    /// Save to a config file, with restrictive permissions on Unix.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let file = ConfigFile {
            token: self.token.clone(),
            repo: format!("{}/{}", self.owner, self.repo),
            branch: self.branch.clone(),
            api_url: self.api_url.clone(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(&file)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut options = std::fs::OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            std::io::Write::write_all(&mut options.open(path)?, content.as_bytes())?;
            Ok(())
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, content)?;
            Ok(())
        }
    }

    /// Default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| PublishError::NotConfigured {
            message: "could not determine config directory".to_string(),
        })?;
        Ok(config_dir.join("gitpress").join("config.yaml"))
    }
}

/// Split an "owner/repo" spec at the first slash.
fn split_repo_spec(spec: &str) -> Result<(String, String)> {
    match spec.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(PublishError::InvalidRepoSpec {
            spec: spec.to_string(),
        }),
    }
}
