//! Tag suggestion from title keywords
//!
//! Every post gets the base tags, plus one topical tag per keyword group
//! matched in the title.

/// Upper bound on suggested tags.
const MAX_TAGS: usize = 5;

/// Tags applied to every post.
const BASE_TAGS: [&str; 2] = ["crypto", "news"];

/// Keyword groups: (tag, title keywords that trigger it).
const KEYWORD_TAGS: [(&str, &[&str]); 8] = [
    ("bitcoin", &["bitcoin", "btc"]),
    ("ethereum", &["ethereum", "eth"]),
    ("defi", &["defi", "decentralized finance"]),
    ("altcoins", &["altcoin", "altcoins"]),
    ("nft", &["nft", "nfts"]),
    ("regulations", &["regulation", "sec", "cftc", "regulatory"]),
    ("trading", &["trading", "trader", "trade"]),
    ("exchanges", &["exchange", "coinbase", "binance", "kraken"]),
];

/// Suggest tags for a title: base tags first, then keyword matches in table
/// order, deduplicated, at most [`MAX_TAGS`].
pub fn suggest_tags(title: &str) -> Vec<String> {
    let lowered = title.to_lowercase();
    let mut tags: Vec<String> = BASE_TAGS.iter().map(|t| t.to_string()).collect();

    for (tag, keywords) in KEYWORD_TAGS {
        if keywords.iter().any(|k| lowered.contains(k)) && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    tags.truncate(MAX_TAGS);
    tags
}
