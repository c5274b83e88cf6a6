//! CLI support for zonespec
//!
//! Provides programmatic access to the zonespec command-line tool, so the
//! same checks can be embedded in a server's admin commands.

mod check;
mod docs;
mod resolve;

pub use check::{CheckOptions, CheckResult, execute_check, render_diagnostic};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use resolve::{ResolveOptions, execute_resolve};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Zone specification did not compile
    #[error("{0}")]
    Compile(#[from] crate::CompileError),

    /// Zone file could not be read
    #[error("{0}")]
    Store(#[from] crate::StoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No zone file provided
    #[error("No zones provided. Use --zones or pipe a zone file to stdin.")]
    NoInput,

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'zonespec docs' to see available categories.")]
    UnknownCategory(String),
}
