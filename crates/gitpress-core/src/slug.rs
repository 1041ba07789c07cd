//! Title-derived slugs and repository paths
//!
//! The slug is a post's de facto identity: two titles that normalize the
//! same way publish to the same path, and renaming a title between saves
//! publishes to a new path while the old file stays behind.

use once_cell::sync::Lazy;
use regex::Regex;

/// Directory all posts are published under.
pub const POSTS_DIR: &str = "content/posts";

/// Maximum slug length in characters.
const MAX_SLUG_LEN: usize = 50;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("valid regex"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").expect("valid regex"));

/// Lower-case, URL-safe slug of a title.
///
/// Lower-cases, strips everything that is not an ASCII word character,
/// whitespace or hyphen, collapses separator runs to a single hyphen, trims
/// hyphens at both ends and truncates to [`MAX_SLUG_LEN`]. An all-symbol
/// title yields an empty slug.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let collapsed = SEPARATORS.replace_all(&stripped, "-");
    let trimmed = collapsed.trim_matches('-');

    // Truncation can land right after a separator; trim again so the stem
    // never ends with a hyphen.
    let truncated: String = trimmed.chars().take(MAX_SLUG_LEN).collect();
    truncated.trim_end_matches('-').to_string()
}

/// Markdown filename for a title.
pub fn filename(title: &str) -> String {
    format!("{}.md", slugify(title))
}

/// Repository path for a title.
pub fn post_path(title: &str) -> String {
    format!("{}/{}", POSTS_DIR, filename(title))
}
