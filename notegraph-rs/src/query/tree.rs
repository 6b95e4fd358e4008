//! Folder tree rendering.

use crate::error::Result;
use crate::scanner::{self, NOTE_EXTENSION};
use crate::vault::Vault;
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;

/// Kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

/// One entry in the folder tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// List the folder tree below `subpath`, capped at `depth` levels.
///
/// At every level, folders come first sorted by name, then note files sorted
/// by name; hidden entries are skipped. `depth <= 0` yields the root-level
/// listing only (no recursion into children); `depth = n` descends `n`
/// directory levels below the listing root.
pub fn folder_tree(vault: &Vault, subpath: &str, depth: i64) -> Result<Vec<TreeNode>> {
    let root = vault.resolve_folder(subpath)?;
    build_level(&root, depth.max(0))
}

fn build_level(dir: &Path, remaining: i64) -> Result<Vec<TreeNode>> {
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if scanner::is_hidden(&name) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            folders.push(path);
        } else if path.extension() == Some(OsStr::new(NOTE_EXTENSION)) {
            files.push(path);
        }
    }

    folders.sort();
    files.sort();

    let mut nodes = Vec::new();
    for folder in folders {
        let children = if remaining > 0 {
            build_level(&folder, remaining - 1)?
        } else {
            Vec::new()
        };
        nodes.push(TreeNode {
            name: entry_name(&folder),
            kind: EntryKind::Folder,
            children,
        });
    }
    for file in files {
        nodes.push(TreeNode {
            name: entry_name(&file),
            kind: EntryKind::File,
            children: Vec::new(),
        });
    }

    Ok(nodes)
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Render the tree as indented plain text, folders suffixed with `/`.
pub fn render_tree(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    render_level(nodes, 0, &mut out);
    out
}

fn render_level(nodes: &[TreeNode], indent: usize, out: &mut String) {
    for node in nodes {
        let pad = "  ".repeat(indent);
        match node.kind {
            EntryKind::Folder => out.push_str(&format!("{}{}/\n", pad, node.name)),
            EntryKind::File => out.push_str(&format!("{}{}\n", pad, node.name)),
        }
        render_level(&node.children, indent + 1, out);
    }
}
