//! Save command - commit a post to the repository

use std::path::Path;

use crate::commands::{load_post, publisher};
use crate::display;
use crate::error::Result;

pub async fn run(
    config_path: Option<&Path>,
    post_file: &Path,
    update: bool,
    auto_tags: bool,
) -> Result<()> {
    let post = load_post(post_file, auto_tags)?;
    let publisher = publisher(config_path)?;

    let path = publisher.save_post(&post, !update).await?;

    display::success(&format!("Published '{}'", post.title));
    display::detail("path", &path);
    display::detail("branch", &publisher.config().branch);
    Ok(())
}
