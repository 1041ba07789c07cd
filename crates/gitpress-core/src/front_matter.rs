//! Hugo front-matter rendering and parsing
//!
//! The emitted block is a fixed template: key set, key order and quoting are
//! part of the contract with the site generator's parser. Only the quote
//! character of each string field is escaped (`\'` inside single quotes,
//! `\"` inside double quotes); anything else passes through verbatim.

use chrono::{SecondsFormat, Utc};

use crate::error::{CoreError, Result};
use crate::post::Post;

/// Author stamped into every post.
pub const AUTHOR: &str = "CryptoTradeInsights";

/// Category used when a post does not set one.
pub const DEFAULT_CATEGORY: &str = "news";

/// Render a post as a complete markdown document: front matter, blank line,
/// body.
pub fn render(post: &Post) -> String {
    let date = post.date.to_rfc3339_opts(SecondsFormat::Millis, true);
    let tags = serde_json::to_string(&post.tags).expect("string array serializes");
    let category = post.category.as_deref().unwrap_or(DEFAULT_CATEGORY);

    format!(
        "+++\n\
         date = '{date}'\n\
         draft = {draft}\n\
         title = '{title}'\n\
         description = \"{description}\"\n\
         tags = {tags}\n\
         categories = [\"{category}\"]\n\
         author = \"{author}\"\n\
         showToc = true\n\
         TocOpen = false\n\
         hidemeta = false\n\
         +++\n\
         \n\
         {content}",
        date = date,
        draft = post.draft,
        title = post.title.replace('\'', "\\'"),
        description = post.description.replace('"', "\\\""),
        tags = tags,
        category = category,
        author = AUTHOR,
        content = post.content,
    )
}

/// Parsed front-matter fields, prior to conversion into a [`Post`].
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    pub date: Option<String>,
    pub draft: Option<bool>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub author: Option<String>,
}

impl FrontMatter {
    /// Split a document into its front-matter block and body.
    ///
    /// Only the dialect [`render`] emits is understood: one `key = value`
    /// per line with single-quoted strings, double-quoted strings, JSON
    /// string arrays and bare booleans. Missing delimiters are errors.
    pub fn parse(document: &str) -> Result<(Self, String)> {
        let rest = document
            .strip_prefix("+++\n")
            .ok_or_else(|| invalid("document does not start with a +++ line"))?;
        let (block, body) = rest
            .split_once("\n+++\n")
            .ok_or_else(|| invalid("unterminated front-matter block"))?;
        // One blank line separates the block from the body.
        let body = body.strip_prefix('\n').unwrap_or(body);

        let mut matter = FrontMatter::default();
        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| invalid(format!("malformed line: {line}")))?;
            let key = key.trim();
            let value = value.trim();

            match key {
                "date" => matter.date = Some(parse_single_quoted(value)?),
                "draft" => matter.draft = Some(parse_bool(value)?),
                "title" => matter.title = Some(parse_single_quoted(value)?),
                "description" => matter.description = Some(parse_double_quoted(value)?),
                "tags" => matter.tags = parse_string_array(value)?,
                "categories" => matter.categories = parse_string_array(value)?,
                "author" => matter.author = Some(parse_double_quoted(value)?),
                // Presentation flags (showToc, TocOpen, hidemeta) are fixed
                // on render and ignored here.
                _ => {}
            }
        }

        Ok((matter, body.to_string()))
    }

    /// Convert parsed fields into a post, applying the render-side defaults.
    pub fn into_post(self, body: &str) -> Result<Post> {
        let title = self.title.ok_or(CoreError::MissingField {
            field: "title".to_string(),
        })?;
        let date = match self.date {
            Some(raw) => raw
                .parse()
                .map_err(|_| CoreError::InvalidDate { value: raw })?,
            None => Utc::now(),
        };

        Ok(Post {
            title,
            description: self.description.unwrap_or_default(),
            content: body.to_string(),
            date,
            tags: self.tags,
            category: self.categories.into_iter().next(),
            draft: self.draft.unwrap_or(false),
        })
    }
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::InvalidFrontMatter {
        message: message.into(),
    }
}

fn parse_single_quoted(value: &str) -> Result<String> {
    let inner = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .ok_or_else(|| invalid(format!("expected single-quoted value, got {value}")))?;
    Ok(inner.replace("\\'", "'"))
}

fn parse_double_quoted(value: &str) -> Result<String> {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(|| invalid(format!("expected double-quoted value, got {value}")))?;
    Ok(inner.replace("\\\"", "\""))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(format!("expected boolean, got {value}"))),
    }
}

fn parse_string_array(value: &str) -> Result<Vec<String>> {
    serde_json::from_str(value).map_err(|e| invalid(format!("expected string array: {e}")))
}
