//! Notegraph - a library for indexing and querying vaults of linked
//! markdown notes.
//!
//! # Overview
//!
//! Notegraph scans a directory tree of text notes, parses each note's
//! structured metadata (frontmatter, inline tags, wiki-style links), derives
//! the bidirectional link graph, and answers structural queries:
//! - Note listing, reading, and resolution (bare name or path)
//! - Full-text search with match context
//! - Tag lookup and vault-wide tag census
//! - Recency ranking and folder-tree rendering
//! - Backlink derivation (who links to a note)
//! - Mutations (create/update/append) that keep frontmatter consistent
//!
//! Nothing is cached across calls: every query re-derives its answer from the
//! current state of the vault on disk.
//!
//! # Example
//!
//! ```no_run
//! use notegraph::{Vault, graph};
//!
//! let vault = Vault::open("/path/to/vault").unwrap();
//!
//! for path in vault.list_notes().unwrap() {
//!     println!("{}", path.display());
//! }
//!
//! let note = vault.load_note("my-note").unwrap();
//! println!("Tags: {:?}", note.tags);
//!
//! let report = graph::links_of(&vault, "my-note").unwrap();
//! println!("Backlinks: {:?}", report.backlinks);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod note;
pub mod parser;
pub mod query;
pub mod scanner;
pub mod vault;

// Re-export main types at crate root
pub use config::Config;
pub use error::{Result, VaultError};
pub use note::{Note, NoteInfo};
pub use parser::{FmValue, Frontmatter};
pub use vault::Vault;
