//! CLI command implementations.

pub mod args;
pub mod output;

pub mod append;
pub mod create;
pub mod links;
pub mod list;
pub mod read;
pub mod recent;
pub mod search;
pub mod tags;
pub mod tree;
pub mod update;

pub use args::{Cli, Commands};
pub use output::Output;

use crate::error::{Result, VaultError};
use crate::parser::Frontmatter;

/// Parse the `--frontmatter` JSON argument, if given.
pub(crate) fn frontmatter_from_json(raw: Option<&str>) -> Result<Option<Frontmatter>> {
    match raw {
        Some(json) => {
            let fm: Frontmatter = serde_json::from_str(json).map_err(|e| {
                VaultError::Other(format!("Invalid frontmatter JSON: {}", e))
            })?;
            Ok(Some(fm))
        }
        None => Ok(None),
    }
}
