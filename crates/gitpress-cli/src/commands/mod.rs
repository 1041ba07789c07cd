//! CLI command implementations

pub mod delete;
pub mod info;
pub mod render;
pub mod save;
pub mod setup;
pub mod verify;

use std::path::Path;

use gitpress_core::Post;
use gitpress_github::{GithubConfig, Publisher};

use crate::error::Result;

/// Resolve configuration and build a publisher.
pub(crate) fn publisher(config_path: Option<&Path>) -> Result<Publisher> {
    let config = GithubConfig::resolve(config_path)?;
    Ok(Publisher::new(config)?)
}

/// Load a post, optionally filling empty tags from the title.
pub(crate) fn load_post(path: &Path, auto_tags: bool) -> Result<Post> {
    let mut post = Post::load(path)?;
    if auto_tags && post.tags.is_empty() {
        post.tags = gitpress_core::suggest_tags(&post.title);
    }
    Ok(post)
}
