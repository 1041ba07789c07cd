//! Blog post model

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::front_matter::FrontMatter;

/// A blog post as supplied by an editor or a content pipeline.
///
/// The title doubles as the post's identity: the repository path is derived
/// from it and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title, also the source of the repository path
    pub title: String,

    /// Short summary used in the front matter
    #[serde(default)]
    pub description: String,

    /// Markdown body
    #[serde(default)]
    pub content: String,

    /// Publication date
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,

    /// Front-matter tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Single category; the front matter falls back to "news"
    #[serde(default)]
    pub category: Option<String>,

    /// Draft flag
    #[serde(default)]
    pub draft: bool,
}

impl Post {
    /// Load a post from disk.
    ///
    /// `.yaml`/`.yml` files deserialize directly; `.md` files are parsed as
    /// a front-matter block followed by the body.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::PostNotFound {
                path: path.display().to_string(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&raw)?),
            Some("md") => Self::from_markdown(&raw),
            _ => Err(CoreError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Build a post from a markdown document carrying a front-matter block.
    pub fn from_markdown(document: &str) -> Result<Self> {
        let (matter, body) = FrontMatter::parse(document)?;
        matter.into_post(&body)
    }
}
