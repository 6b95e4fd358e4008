//! Frontmatter parsing and serialization.
//!
//! The grammar is deliberately a small subset of YAML: one `key: value` pair
//! per line, where only the first colon on the line is significant. Values are
//! either a bracketed string array (`[a, b, c]`), a quoted scalar, or a raw
//! string stored verbatim. No numeric or boolean coercion happens on parse.
//! Parsing is total: malformed input degrades to "no metadata", never an error.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Frontmatter extraction result.
#[derive(Debug, Clone)]
pub struct FrontmatterSplit<'a> {
    /// The raw block between the delimiters (without them), if present.
    pub raw: Option<&'a str>,
    /// The content after the frontmatter block.
    pub body: &'a str,
}

/// Split content into a raw frontmatter block and the body.
///
/// The block must start at byte offset 0 with a `---` delimiter line and be
/// closed by a second `---` delimiter line; anything else (including a
/// delimiter later in the file) is ordinary body text.
pub fn split_frontmatter(content: &str) -> FrontmatterSplit<'_> {
    if let Some(after_open) = content.strip_prefix("---\n") {
        if let Some(pos) = after_open.find("\n---\n") {
            return FrontmatterSplit {
                raw: Some(&after_open[..pos]),
                body: &after_open[pos + 5..],
            };
        }
    }

    FrontmatterSplit {
        raw: None,
        body: content,
    }
}

/// A frontmatter value: a string scalar or a flat string array.
///
/// `Number` and `Bool` never result from parsing a note (scalars are kept as
/// raw strings); they exist so values supplied as JSON through the mutation
/// surface serialize in their natural form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FmValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<String>),
}

impl FmValue {
    /// Returns the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FmValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a string list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FmValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for FmValue {
    /// Renders the value as it appears on a serialized frontmatter line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FmValue::Bool(b) => write!(f, "{}", b),
            FmValue::Number(n) => write!(f, "{}", n),
            FmValue::String(s) => write!(f, "\"{}\"", s),
            FmValue::List(items) => {
                let quoted: Vec<String> = items.iter().map(|s| format!("\"{}\"", s)).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
        }
    }
}

/// An ordered mapping of frontmatter keys to values.
///
/// Insertion order is preserved so that serialization round-trips the layout
/// of the source block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    entries: Vec<(String, FmValue)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&FmValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Set a key, replacing an existing entry in place or appending a new one.
    pub fn set(&mut self, key: impl Into<String>, value: FmValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Merge `other` over this mapping: keys from `other` win, existing keys
    /// not named in `other` survive.
    pub fn merge(&mut self, other: &Frontmatter) {
        for (key, value) in other.iter() {
            self.set(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, FmValue)> {
        self.entries.iter()
    }

    /// The `tags` entry as a string list, or empty if absent or not a list.
    pub fn tags(&self) -> &[String] {
        self.get("tags").and_then(|v| v.as_list()).unwrap_or(&[])
    }
}

impl Serialize for Frontmatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Frontmatter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FrontmatterVisitor;

        impl<'de> Visitor<'de> for FrontmatterVisitor {
            type Value = Frontmatter;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of frontmatter keys to scalars or string arrays")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some((key, value)) = access.next_entry::<String, FmValue>()? {
                    entries.push((key, value));
                }
                Ok(Frontmatter { entries })
            }
        }

        deserializer.deserialize_map(FrontmatterVisitor)
    }
}

impl FromIterator<(String, FmValue)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (String, FmValue)>>(iter: I) -> Self {
        let mut fm = Frontmatter::new();
        for (key, value) in iter {
            fm.set(key, value);
        }
        fm
    }
}

/// Parse a raw frontmatter block (without delimiters) into a mapping.
///
/// Lines without a colon, with an empty key, or with an empty value are
/// skipped; they are not errors.
pub fn parse_frontmatter_block(raw: &str) -> Frontmatter {
    let mut fm = Frontmatter::new();

    for line in raw.lines() {
        let Some(colon) = line.find(':') else {
            continue;
        };

        let key = line[..colon].trim();
        if key.is_empty() {
            continue;
        }

        let value = line[colon + 1..].trim();
        if value.is_empty() {
            continue;
        }

        let parsed = if value.starts_with('[') && value.ends_with(']') {
            let inner = &value[1..value.len() - 1];
            if inner.trim().is_empty() {
                FmValue::List(Vec::new())
            } else {
                FmValue::List(
                    inner
                        .split(',')
                        .map(|item| strip_quotes(item.trim()).to_string())
                        .collect(),
                )
            }
        } else {
            FmValue::String(strip_quotes(value).to_string())
        };

        fm.set(key, parsed);
    }

    fm
}

/// Parse the frontmatter of a full note, returning the mapping and the body.
pub fn parse_frontmatter(content: &str) -> (Frontmatter, &str) {
    let split = split_frontmatter(content);
    let fm = match split.raw {
        Some(raw) => parse_frontmatter_block(raw),
        None => Frontmatter::new(),
    };
    (fm, split.body)
}

/// Serialize a mapping to a delimited frontmatter block.
///
/// Returns the empty string for an empty mapping, so a note without metadata
/// carries no delimiter lines at all.
pub fn serialize_frontmatter(fm: &Frontmatter) -> String {
    if fm.is_empty() {
        return String::new();
    }

    let mut out = String::from("---\n");
    for (key, value) in fm.iter() {
        out.push_str(&format!("{}: {}\n", key, value));
    }
    out.push_str("---\n");
    out
}

/// Strip one pair of matching surrounding single or double quotes.
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 {
        let bytes = s.as_bytes();
        if (bytes[0] == b'"' && bytes[s.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[s.len() - 1] == b'\'')
        {
            return &s[1..s.len() - 1];
        }
    }
    s
}
