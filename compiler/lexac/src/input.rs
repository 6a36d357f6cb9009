//! Where the source text comes from.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;
use crate::sample::SAMPLE_SOURCE;

/// One of the three inputs `lexa lex` accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
    Sample,
}

/// Loaded source text with a display name for logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl InputSource {
    /// Pick the input from the `lex` arguments. `-` means stdin.
    pub fn from_args(path: Option<&Path>, sample: bool) -> Self {
        match path {
            _ if sample => InputSource::Sample,
            Some(path) if path != Path::new("-") => InputSource::Path(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// Read the source text.
    ///
    /// Blank input (empty or whitespace only) is rejected with
    /// [`CliError::EmptySource`].
    pub fn load(&self) -> Result<Source, CliError> {
        let source = match self {
            InputSource::Path(path) => Source {
                name: path.display().to_string(),
                text: std::fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?,
            },
            InputSource::Stdin => Source {
                name: "<stdin>".to_string(),
                text: io::read_to_string(io::stdin()).map_err(CliError::Stdin)?,
            },
            InputSource::Sample => Source {
                name: "<sample>".to_string(),
                text: SAMPLE_SOURCE.to_string(),
            },
        };
        debug!(name = %source.name, bytes = source.text.len(), "loaded source");
        if source.text.trim().is_empty() {
            return Err(CliError::EmptySource);
        }
        Ok(source)
    }
}

#[cfg(test)]
mod tests;
