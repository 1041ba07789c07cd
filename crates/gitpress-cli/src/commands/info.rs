//! Info command - show repository metadata

use std::path::Path;

use crate::commands::publisher;
use crate::display;
use crate::error::{CliError, Result};

pub async fn run(config_path: Option<&Path>, json: bool) -> Result<()> {
    let publisher = publisher(config_path)?;
    let info = publisher.repo_info().await?;

    if json {
        let rendered = serde_json::to_string_pretty(&info).map_err(|e| CliError::Io {
            message: e.to_string(),
        })?;
        println!("{rendered}");
        return Ok(());
    }

    display::success(&info.full_name);
    if let Some(description) = &info.description {
        display::detail("description", description);
    }
    display::detail("default branch", &info.default_branch);
    display::detail("visibility", if info.private { "private" } else { "public" });
    display::detail("url", &info.html_url);
    Ok(())
}
