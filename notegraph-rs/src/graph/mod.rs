//! Link graph derivation: outgoing links and backlinks.

pub mod backlinks;

pub use backlinks::{LinkReport, backlinks_of, links_of};
