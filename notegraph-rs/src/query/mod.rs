//! Stateless read operations over the vault: search, tags, recency, and the
//! folder tree.

pub mod recent;
pub mod search;
pub mod tags;
pub mod tree;

pub use recent::recent_notes;
pub use search::{SearchHit, SearchMatch, search};
pub use tags::{TagCount, all_tags, notes_by_tag};
pub use tree::{EntryKind, TreeNode, folder_tree, render_tree};
