//! Delete command - remove a post from the repository

use std::path::Path;

use gitpress_core::Post;

use crate::commands::publisher;
use crate::display;
use crate::error::{CliError, Result};

pub async fn run(
    config_path: Option<&Path>,
    post_file: Option<&Path>,
    title: Option<&str>,
) -> Result<()> {
    let title = match (post_file, title) {
        (Some(path), None) => Post::load(path)?.title,
        (None, Some(title)) => title.to_string(),
        _ => return Err(CliError::usage("pass a post file or --title <title>")),
    };

    let publisher = publisher(config_path)?;
    let path = publisher.delete_title(&title).await?;

    display::success(&format!("Deleted '{}'", title));
    display::detail("path", &path);
    Ok(())
}
