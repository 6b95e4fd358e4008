//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notegraph")]
#[command(author, version, about = "A CLI for indexing and querying linked markdown note vaults", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides config default)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes in the vault
    List(ListArgs),

    /// Read a note with its parsed metadata
    Read(ReadArgs),

    /// Show outgoing links and backlinks of a note
    Links(LinksArgs),

    /// Search note names and contents
    Search(SearchArgs),

    /// List notes carrying a tag
    Tagged(TaggedArgs),

    /// List all tags in the vault with counts
    Tags(TagsArgs),

    /// List the most recently modified notes
    Recent(RecentArgs),

    /// Show the vault folder tree
    Tree(TreeArgs),

    /// Create a new note
    Create(CreateArgs),

    /// Replace a note's body, merging frontmatter
    Update(UpdateArgs),

    /// Append content to a note
    Append(AppendArgs),
}

// === List ===

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list notes whose vault-relative path matches this glob
    #[arg(long)]
    pub glob: Option<String>,

    /// Sort field
    #[arg(long, value_enum, default_value_t = SortField::Path)]
    pub sort: SortField,

    /// Reverse the sort order
    #[arg(long)]
    pub reverse: bool,

    /// Maximum number of notes to list
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Path,
    Name,
    Modified,
}

// === Read ===

#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// Note path or name (extension optional)
    pub note: String,
}

// === Links ===

#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Note path or name (extension optional)
    pub note: String,
}

// === Search ===

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,

    /// Maximum number of results
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

// === Tagged ===

#[derive(Parser, Debug)]
pub struct TaggedArgs {
    /// Tag to filter by (leading # optional)
    pub tag: String,

    /// Maximum number of results
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

// === Tags ===

#[derive(Parser, Debug)]
pub struct TagsArgs {}

// === Recent ===

#[derive(Parser, Debug)]
pub struct RecentArgs {
    /// Maximum number of notes to return
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

// === Tree ===

#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Folder to list, relative to the vault root (default: root)
    #[arg(default_value = "")]
    pub path: String,

    /// How many directory levels to descend below the listing root;
    /// 0 lists the root level only
    #[arg(long, default_value_t = 2)]
    pub depth: i64,

    /// Render as indented plain text instead of a structured listing
    #[arg(long)]
    pub plain: bool,
}

// === Create ===

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Path for the new note (relative to vault root)
    pub path: String,

    /// Note body
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Frontmatter as a JSON object (e.g. '{"tags": ["research"]}')
    #[arg(long)]
    pub frontmatter: Option<String>,

    /// Replace the note if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

// === Update ===

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Path to the note to update
    pub path: String,

    /// New note body (replaces the existing body)
    #[arg(short, long)]
    pub content: String,

    /// Frontmatter as a JSON object, merged over the existing keys
    #[arg(long)]
    pub frontmatter: Option<String>,
}

// === Append ===

#[derive(Parser, Debug)]
pub struct AppendArgs {
    /// Path to the note to append to
    pub path: String,

    /// Content to append
    #[arg(short, long)]
    pub content: String,

    /// Create the note if it does not exist
    #[arg(long)]
    pub create_if_missing: bool,
}
