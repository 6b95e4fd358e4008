//! Vault representation: note resolution, listing, and mutation.

use crate::error::{Result, VaultError};
use crate::note::{Note, NoteInfo};
use crate::parser::{Frontmatter, FmValue, parse_frontmatter, serialize_frontmatter};
use crate::scanner;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// A vault: the root directory tree containing notes.
///
/// The root is the only shared resource; it is passed in explicitly rather
/// than read from any ambient global. All note paths are relative to it.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open a vault at the given root.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(VaultError::VaultNotFound(root));
        }
        Ok(Self { root })
    }

    /// The vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Normalize a user-supplied note identifier (adds the extension if
    /// missing).
    pub fn normalize_note_path(&self, path: &str) -> PathBuf {
        let path = path.trim();
        if path.ends_with(".md") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.md", path))
        }
    }

    /// Resolve a user-supplied identifier to a vault-relative path, rejecting
    /// anything that would escape the root.
    pub fn resolve(&self, path_or_name: &str) -> Result<PathBuf> {
        let relative = self.normalize_note_path(path_or_name);
        self.check_relative(&relative)?;
        Ok(relative)
    }

    /// Reject absolute paths and `..` components before they touch disk.
    fn check_relative(&self, relative: &Path) -> Result<()> {
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(VaultError::InvalidPath(relative.to_path_buf()));
        }
        Ok(())
    }

    /// Resolve a vault-relative folder path, rejecting escapes and absent
    /// directories. An empty subpath is the vault root itself.
    pub fn resolve_folder(&self, subpath: &str) -> Result<PathBuf> {
        let relative = PathBuf::from(subpath.trim());
        self.check_relative(&relative)?;

        let full = self.root.join(&relative);
        if !full.is_dir() {
            return Err(VaultError::FolderNotFound(relative));
        }
        Ok(full)
    }

    /// Get the full on-disk path for a vault-relative path.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Check if a note exists.
    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.note_path(relative_path).is_file()
    }

    /// Load a note by identifier (bare name, path with or without extension).
    pub fn load_note(&self, path_or_name: &str) -> Result<Note> {
        let relative = self.resolve(path_or_name)?;
        Note::load(&self.root, &relative)
    }

    /// File-level info for a note.
    pub fn note_info(&self, relative_path: &Path) -> Result<NoteInfo> {
        NoteInfo::from_path(&self.root, relative_path)
    }

    /// List all notes, vault-relative, in deterministic walk order.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let absolute = scanner::list_note_paths(&self.root)?;
        Ok(absolute
            .into_iter()
            .filter_map(|p| p.strip_prefix(&self.root).ok().map(Path::to_path_buf))
            .collect())
    }

    /// List notes whose vault-relative path matches a glob pattern.
    pub fn list_notes_matching(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let pattern = glob::Pattern::new(pattern)?;
        Ok(self
            .list_notes()?
            .into_iter()
            .filter(|p| pattern.matches_path(p))
            .collect())
    }

    /// Create a new note from a body and frontmatter.
    ///
    /// Fails with `NoteAlreadyExists` when the target exists and `overwrite`
    /// is false. Parent directories are created as needed.
    pub fn create_note(
        &self,
        path_or_name: &str,
        body: &str,
        frontmatter: &Frontmatter,
        overwrite: bool,
    ) -> Result<PathBuf> {
        let relative = self.resolve(path_or_name)?;

        if !overwrite && self.note_exists(&relative) {
            return Err(VaultError::NoteAlreadyExists(relative));
        }

        let content = format!("{}{}", serialize_frontmatter(frontmatter), body);
        self.write_note(&relative, &content)?;
        Ok(relative)
    }

    /// Replace a note's body, merging frontmatter and stamping `updated`.
    ///
    /// The caller's frontmatter keys win; existing keys not named survive.
    /// The body is replaced entirely, not patched.
    pub fn update_note(
        &self,
        path_or_name: &str,
        body: &str,
        frontmatter: Option<&Frontmatter>,
    ) -> Result<PathBuf> {
        let relative = self.resolve(path_or_name)?;

        let existing = match std::fs::read_to_string(self.note_path(&relative)) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(VaultError::NoteNotFound(relative));
            }
            Err(e) => return Err(e.into()),
        };

        let (mut merged, _) = parse_frontmatter(&existing);
        if let Some(overlay) = frontmatter {
            merged.merge(overlay);
        }
        merged.set(
            "updated",
            FmValue::String(chrono::Utc::now().to_rfc3339()),
        );

        let content = format!("{}{}", serialize_frontmatter(&merged), body);
        self.write_note(&relative, &content)?;
        Ok(relative)
    }

    /// Append raw content to a note.
    ///
    /// Operates on raw bytes, so frontmatter is untouched: the existing
    /// content is trimmed of trailing whitespace and the new content follows
    /// after one blank line. When the note is absent and `create_if_missing`
    /// is set, the content becomes the entire new file (no frontmatter is
    /// synthesized).
    pub fn append_note(
        &self,
        path_or_name: &str,
        content: &str,
        create_if_missing: bool,
    ) -> Result<PathBuf> {
        let relative = self.resolve(path_or_name)?;
        let full_path = self.note_path(&relative);

        let existing = match std::fs::read_to_string(&full_path) {
            Ok(existing) => Some(existing),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let new_content = match existing {
            Some(existing) => format!("{}\n\n{}", existing.trim_end(), content),
            None => {
                if !create_if_missing {
                    return Err(VaultError::NoteNotFound(relative));
                }
                content.to_string()
            }
        };

        self.write_note(&relative, &new_content)?;
        Ok(relative)
    }

    /// Write a note, creating parent directories and replacing the target
    /// atomically so no reader observes a half-written file.
    fn write_note(&self, relative_path: &Path, content: &str) -> Result<()> {
        let full_path = self.note_path(relative_path);
        let parent = full_path.parent().unwrap_or(&self.root);
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&full_path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_frontmatter_block;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn setup_test_vault() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::open(dir.path()).unwrap();
        (dir, vault)
    }

    fn read(vault: &Vault, rel: &str) -> String {
        std::fs::read_to_string(vault.note_path(Path::new(rel))).unwrap()
    }

    #[test]
    fn test_open_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let result = Vault::open(dir.path().join("nope"));
        assert!(matches!(result, Err(VaultError::VaultNotFound(_))));
    }

    #[test]
    fn test_normalize_note_path() {
        let (_dir, vault) = setup_test_vault();
        assert_eq!(vault.normalize_note_path("note"), PathBuf::from("note.md"));
        assert_eq!(
            vault.normalize_note_path("note.md"),
            PathBuf::from("note.md")
        );
        assert_eq!(
            vault.normalize_note_path("folder/note"),
            PathBuf::from("folder/note.md")
        );
    }

    #[test]
    fn test_resolve_rejects_escape() {
        let (_dir, vault) = setup_test_vault();
        assert!(matches!(
            vault.resolve("../outside"),
            Err(VaultError::InvalidPath(_))
        ));
        assert!(matches!(
            vault.resolve("sub/../../outside"),
            Err(VaultError::InvalidPath(_))
        ));
        assert!(matches!(
            vault.resolve("/etc/passwd"),
            Err(VaultError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_create_and_load() {
        let (_dir, vault) = setup_test_vault();
        vault
            .create_note("test", "Hello, world!", &Frontmatter::new(), false)
            .unwrap();

        let note = vault.load_note("test").unwrap();
        assert_eq!(note.body, "Hello, world!");
        assert!(note.frontmatter.is_empty());
    }

    #[test]
    fn test_create_with_frontmatter() {
        let (_dir, vault) = setup_test_vault();
        let fm = parse_frontmatter_block("title: Hi\ntags: [a, b]");
        vault.create_note("fm.md", "body", &fm, false).unwrap();

        assert_eq!(
            read(&vault, "fm.md"),
            "---\ntitle: \"Hi\"\ntags: [\"a\", \"b\"]\n---\nbody"
        );

        let note = vault.load_note("fm").unwrap();
        assert_eq!(note.frontmatter, fm);
        assert_eq!(note.body, "body");
    }

    #[test]
    fn test_create_in_subdirectory() {
        let (_dir, vault) = setup_test_vault();
        vault
            .create_note("sub/folder/note.md", "Nested", &Frontmatter::new(), false)
            .unwrap();
        assert!(vault.note_exists(Path::new("sub/folder/note.md")));
    }

    #[test]
    fn test_create_collision_keeps_original() {
        let (_dir, vault) = setup_test_vault();
        vault
            .create_note("x.md", "hi", &Frontmatter::new(), false)
            .unwrap();

        let result = vault.create_note("x.md", "bye", &Frontmatter::new(), false);
        assert!(matches!(result, Err(VaultError::NoteAlreadyExists(_))));
        assert_eq!(read(&vault, "x.md"), "hi");
    }

    #[test]
    fn test_create_overwrite() {
        let (_dir, vault) = setup_test_vault();
        vault
            .create_note("x.md", "hi", &Frontmatter::new(), false)
            .unwrap();
        vault
            .create_note("x.md", "bye", &Frontmatter::new(), true)
            .unwrap();
        assert_eq!(read(&vault, "x.md"), "bye");
    }

    #[test]
    fn test_update_missing_fails() {
        let (_dir, vault) = setup_test_vault();
        let result = vault.update_note("missing.md", "text", None);
        assert!(matches!(result, Err(VaultError::NoteNotFound(_))));
    }

    #[test]
    fn test_update_replaces_body_and_merges_frontmatter() {
        let (_dir, vault) = setup_test_vault();
        let fm = parse_frontmatter_block("title: Old\nstatus: active");
        vault.create_note("n.md", "old body", &fm, false).unwrap();

        let overlay = parse_frontmatter_block("title: New");
        vault
            .update_note("n.md", "new body", Some(&overlay))
            .unwrap();

        let note = vault.load_note("n").unwrap();
        assert_eq!(note.body, "new body");
        assert_eq!(
            note.frontmatter.get("title").and_then(|v| v.as_str()),
            Some("New")
        );
        assert_eq!(
            note.frontmatter.get("status").and_then(|v| v.as_str()),
            Some("active")
        );
        assert!(note.frontmatter.get("updated").is_some());
    }

    #[test]
    fn test_update_stamps_updated_without_overlay() {
        let (_dir, vault) = setup_test_vault();
        vault
            .create_note("n.md", "body", &Frontmatter::new(), false)
            .unwrap();
        vault.update_note("n.md", "body 2", None).unwrap();

        let note = vault.load_note("n").unwrap();
        assert!(note.frontmatter.get("updated").is_some());
        assert_eq!(note.body, "body 2");
    }

    #[test]
    fn test_append_missing_without_create_fails() {
        let (_dir, vault) = setup_test_vault();
        let result = vault.append_note("log.md", "entry", false);
        assert!(matches!(result, Err(VaultError::NoteNotFound(_))));
    }

    #[test]
    fn test_append_creates_with_exact_content() {
        let (_dir, vault) = setup_test_vault();
        vault.append_note("log.md", "new line", true).unwrap();
        assert_eq!(read(&vault, "log.md"), "new line");
    }

    #[test]
    fn test_append_separates_with_one_blank_line() {
        let (_dir, vault) = setup_test_vault();
        vault.append_note("log.md", "first", true).unwrap();
        vault.append_note("log.md", "second", true).unwrap();
        assert_eq!(read(&vault, "log.md"), "first\n\nsecond");
    }

    #[test]
    fn test_append_trims_trailing_whitespace_first() {
        let (_dir, vault) = setup_test_vault();
        vault.append_note("log.md", "first\n\n\n", true).unwrap();
        vault.append_note("log.md", "second", true).unwrap();
        assert_eq!(read(&vault, "log.md"), "first\n\nsecond");
    }

    #[test]
    fn test_append_leaves_frontmatter_untouched() {
        let (_dir, vault) = setup_test_vault();
        let fm = parse_frontmatter_block("title: Log");
        vault.create_note("log.md", "start", &fm, false).unwrap();
        vault.append_note("log", "entry", false).unwrap();

        assert_eq!(
            read(&vault, "log.md"),
            "---\ntitle: \"Log\"\n---\nstart\n\nentry"
        );
    }

    #[test]
    fn test_list_notes() {
        let (_dir, vault) = setup_test_vault();
        vault
            .create_note("a.md", "A", &Frontmatter::new(), false)
            .unwrap();
        vault
            .create_note("b.md", "B", &Frontmatter::new(), false)
            .unwrap();
        vault
            .create_note("sub/c.md", "C", &Frontmatter::new(), false)
            .unwrap();

        let notes = vault.list_notes().unwrap();
        assert_eq!(
            notes,
            vec![
                PathBuf::from("sub/c.md"),
                PathBuf::from("a.md"),
                PathBuf::from("b.md"),
            ]
        );
    }

    #[test]
    fn test_list_notes_matching() {
        let (_dir, vault) = setup_test_vault();
        vault
            .create_note("daily/2024-01-01.md", "x", &Frontmatter::new(), false)
            .unwrap();
        vault
            .create_note("other.md", "y", &Frontmatter::new(), false)
            .unwrap();

        let notes = vault.list_notes_matching("daily/*.md").unwrap();
        assert_eq!(notes, vec![PathBuf::from("daily/2024-01-01.md")]);
    }

    #[test]
    fn test_load_not_found_vs_invalid_path() {
        let (_dir, vault) = setup_test_vault();
        assert!(matches!(
            vault.load_note("absent"),
            Err(VaultError::NoteNotFound(_))
        ));
        assert!(matches!(
            vault.load_note("../absent"),
            Err(VaultError::InvalidPath(_))
        ));
    }
}
