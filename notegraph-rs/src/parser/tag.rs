//! Inline tag parsing.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Tag token: # immediately followed by a letter, then letters, digits,
// underscore, hyphen, or / for nested tags. Purely numeric references like
// #123 are not tags.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([a-zA-Z][a-zA-Z0-9_/-]*)").unwrap());

/// Parse all inline tags from body text, without the leading `#`.
///
/// Case is preserved; duplicates are dropped, keeping first-occurrence order.
pub fn parse_tags(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for cap in TAG.captures_iter(body) {
        let tag = cap.get(1).unwrap().as_str();
        if seen.insert(tag.to_string()) {
            tags.push(tag.to_string());
        }
    }

    tags
}
