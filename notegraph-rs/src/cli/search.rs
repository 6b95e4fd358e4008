//! Search command implementation.

use crate::cli::args::SearchArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::query::{self, SearchHit};
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<SearchHit>,
}

pub fn run(vault: &Vault, args: &SearchArgs, output: &Output) -> Result<()> {
    let results = query::search(vault, &args.query, args.limit)?;

    let response = SearchResponse {
        total: results.len(),
        results,
        query: args.query.clone(),
    };
    output.print(&response)?;

    Ok(())
}
