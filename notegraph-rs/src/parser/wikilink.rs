//! Wiki-style link parsing.

use regex::Regex;
use std::sync::LazyLock;

// Link token: [[target]] or [[target|alias]]. The target is everything before
// the first | or the closing brackets; the alias is ignored. Overlapping or
// nested bracket forms are not specially handled: the first valid match wins
// per scan position.
static WIKILINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)(?:\|[^\]]+)?\]\]").unwrap());

/// Parse all link targets from body text, in encounter order.
///
/// Duplicates are preserved: a note may reference the same target twice.
pub fn parse_links(body: &str) -> Vec<String> {
    WIKILINK
        .captures_iter(body)
        .map(|cap| cap.get(1).unwrap().as_str().to_string())
        .collect()
}
