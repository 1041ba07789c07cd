//! Contents-API file operations
//!
//! Read, upsert and delete of a single file by path. Every mutation
//! re-reads the remote version token first: the API's optimistic
//! concurrency requires the sha of the version being replaced, and absence
//! of a sha means "create". The token is never cached between calls.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GithubClient;
use crate::error::{PublishError, Result};

/// Metadata GitHub returns for a stored file.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFile {
    /// Version token for optimistic concurrency
    pub sha: String,

    /// Repository path
    #[serde(default)]
    pub path: String,

    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Upsert request body.
#[derive(Debug, Serialize)]
struct PutContentRequest<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,

    /// Present only when updating an existing file
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// Delete request body.
#[derive(Debug, Serialize)]
struct DeleteContentRequest<'a> {
    message: &'a str,
    sha: &'a str,
    branch: &'a str,
}

/// Fetch the version token at `path`, treating every failure - 404, auth,
/// transport - as "no existing file".
pub(crate) async fn probe(client: &GithubClient, path: &str) -> Option<RemoteFile> {
    let url = client.contents_url(path);
    let response = match client.request(Method::GET, &url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(path, error = %e, "contents probe failed, treating as new file");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!(path, status = %response.status(), "no existing file at path");
        return None;
    }

    match response.json::<RemoteFile>().await {
        Ok(file) => Some(file),
        Err(e) => {
            tracing::warn!(path, error = %e, "unreadable contents metadata, treating as new file");
            None
        }
    }
}

/// Fetch the version token at `path`; any unsuccessful response is a hard
/// error.
pub(crate) async fn stat(client: &GithubClient, path: &str) -> Result<RemoteFile> {
    let url = client.contents_url(path);
    let response = client.request(Method::GET, &url).send().await?;

    if !response.status().is_success() {
        return Err(PublishError::FileNotFound {
            path: path.to_string(),
        });
    }

    Ok(response.json::<RemoteFile>().await?)
}

/// Create or update a file. The sha, when present, tells the API this is
/// an update of that exact version.
pub(crate) async fn put_file(
    client: &GithubClient,
    path: &str,
    content: &str,
    message: &str,
) -> Result<()> {
    let sha = probe(client, path).await.map(|f| f.sha);

    let body = PutContentRequest {
        message,
        content: BASE64.encode(content.as_bytes()),
        branch: &client.config().branch,
        sha: sha.as_deref(),
    };

    let url = client.contents_url(path);
    tracing::debug!(path, update = sha.is_some(), "committing file");
    let response = client.request(Method::PUT, &url).json(&body).send().await?;

    if !response.status().is_success() {
        return Err(client.error_for(&response, Some(path)));
    }
    Ok(())
}

/// Delete a file. The current version token is fetched first; a missing
/// file is an error here, unlike the upsert path.
pub(crate) async fn delete_file(client: &GithubClient, path: &str, message: &str) -> Result<()> {
    let current = stat(client, path).await?;

    let body = DeleteContentRequest {
        message,
        sha: &current.sha,
        branch: &client.config().branch,
    };

    let url = client.contents_url(path);
    tracing::debug!(path, sha = %current.sha, "deleting file");
    let response = client
        .request(Method::DELETE, &url)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(client.error_for(&response, Some(path)));
    }
    Ok(())
}
