//! HTTP plumbing for the GitHub API
//!
//! One origin, one token. Every request carries the bearer token, the v3
//! JSON media type and a crate-versioned user agent. No retries: a single
//! failed attempt surfaces to the caller.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use url::Url;

use crate::config::GithubConfig;
use crate::error::{PublishError, Result};

/// GitHub media type for the REST v3 API.
const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// Request timeout. The contents API moves small JSON bodies; anything
/// slower than this is a stuck connection.
const TIMEOUT_SECS: u64 = 30;

/// Thin client bound to one repository's API endpoints.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Result<Self> {
        Url::parse(&config.api_url).map_err(|e| PublishError::InvalidApiUrl {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token)).map_err(|_| {
            PublishError::NotConfigured {
                message: "token contains characters not allowed in a header".to_string(),
            }
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("gitpress/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| PublishError::Network {
                message: e.to_string(),
            })?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GithubConfig {
        &self.config
    }

    /// `/repos/{owner}/{repo}` endpoint.
    pub fn repo_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.owner,
            self.config.repo
        )
    }

    /// `/repos/{owner}/{repo}/contents/{path}` endpoint.
    pub fn contents_url(&self, path: &str) -> String {
        format!("{}/contents/{}", self.repo_url(), path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Convert a non-success response into the matching typed error. The
    /// message carries the HTTP status text; GitHub's JSON error body is
    /// not parsed further.
    pub fn error_for(&self, response: &Response, path: Option<&str>) -> PublishError {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => PublishError::AuthRequired {
                url: response.url().to_string(),
            },
            StatusCode::FORBIDDEN => PublishError::AuthFailed {
                message: format!("access denied to {}", response.url()),
            },
            StatusCode::CONFLICT => PublishError::Conflict {
                path: path.unwrap_or_default().to_string(),
            },
            _ => PublishError::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            },
        }
    }
}
