//! Verify command - check the configured credentials

use std::path::Path;

use crate::commands::publisher;
use crate::display;
use crate::error::{CliError, Result};

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let publisher = publisher(config_path)?;
    let repo = format!(
        "{}/{}",
        publisher.config().owner,
        publisher.config().repo
    );

    if publisher.verify_credentials().await? {
        display::success(&format!("Credentials OK for {repo}"));
        Ok(())
    } else {
        display::failure(&format!("GitHub rejected the credentials for {repo}"));
        Err(CliError::remote_with_help(
            "credential verification failed",
            "check the token scopes and the repository name",
        ))
    }
}
