//! CLI error type.
//!
//! The scanner itself cannot fail; everything here comes from the edges:
//! reading input, writing output, and refusing blank input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),

    /// Input was empty or only whitespace.
    #[error("no code to analyze")]
    EmptySource,
}
