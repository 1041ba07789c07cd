//! Render command - format a post locally without publishing

use std::path::Path;

use gitpress_core::{front_matter, post_path};

use crate::commands::load_post;
use crate::display;
use crate::error::Result;

pub fn run(post_file: &Path, output: Option<&Path>, auto_tags: bool) -> Result<()> {
    let post = load_post(post_file, auto_tags)?;
    let document = front_matter::render(&post);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &document)?;

            display::success(&format!("Rendered '{}'", post.title));
            display::detail("file", &path.display().to_string());
            display::detail("repo path", &post_path(&post.title));
        }
        None => print!("{document}"),
    }
    Ok(())
}
