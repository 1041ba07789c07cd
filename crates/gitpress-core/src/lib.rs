//! Gitpress Core - types and text transforms for publishing Hugo posts
//!
//! This crate provides the foundational pieces used throughout gitpress:
//! - `Post`: the blog post model, loadable from YAML or markdown
//! - `FrontMatter`: rendering and parsing of the `+++` metadata block
//! - Slug, filename and repository path derivation from post titles
//! - Tag suggestion from title keywords

pub mod error;
pub mod front_matter;
pub mod post;
pub mod slug;
pub mod tags;

pub use error::{CoreError, Result};
pub use front_matter::FrontMatter;
pub use post::Post;
pub use slug::{filename, post_path, slugify};
pub use tags::suggest_tags;
