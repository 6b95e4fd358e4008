//! Parsers for note metadata: frontmatter, inline tags, and wiki links.

pub mod frontmatter;
pub mod tag;
pub mod wikilink;

pub use frontmatter::{
    FmValue, Frontmatter, FrontmatterSplit, parse_frontmatter, parse_frontmatter_block,
    serialize_frontmatter, split_frontmatter,
};
pub use tag::parse_tags;
pub use wikilink::parse_links;

use std::collections::HashSet;

/// A fully parsed note, without a path.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNote {
    pub frontmatter: Frontmatter,
    pub body: String,
    pub tags: Vec<String>,
    pub links: Vec<String>,
}

/// Parse raw note text into its structured form.
///
/// Total: malformed input falls back to plain body text with empty metadata.
/// Tags are the union of the frontmatter `tags` array and inline tags found in
/// the body, deduplicated with insertion order preserved. Links are scanned in
/// the body only and keep duplicates in encounter order.
pub fn parse_note(content: &str) -> ParsedNote {
    let (frontmatter, body) = parse_frontmatter(content);

    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for tag in frontmatter
        .tags()
        .iter()
        .cloned()
        .chain(parse_tags(body))
    {
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
    }

    let links = parse_links(body);

    ParsedNote {
        frontmatter,
        body: body.to_string(),
        tags,
        links,
    }
}
