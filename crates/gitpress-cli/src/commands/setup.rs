//! Setup command - write the config file

use std::path::Path;

use gitpress_github::GithubConfig;

use crate::display;
use crate::error::{CliError, Result};

pub fn run(config_path: Option<&Path>, repo_spec: &str, branch: &str) -> Result<()> {
    let token = rpassword::prompt_password("GitHub token: ").map_err(|e| CliError::Io {
        message: e.to_string(),
    })?;

    let config = GithubConfig::new(token, repo_spec, Some(branch))?;

    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => GithubConfig::default_path()?,
    };
    config.save_to(&path)?;

    display::success(&format!("Configured {}/{}", config.owner, config.repo));
    display::detail("config", &path.display().to_string());
    display::detail("branch", &config.branch);
    Ok(())
}
