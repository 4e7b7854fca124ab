//! Reading puzzle files from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::validator::validate;

/// Errors that stop a file from reaching the validator.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Could not read file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON - {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Read and decode a JSON document.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "Read puzzle file");
    Ok(serde_json::from_str(&contents)?)
}

/// Load a document and validate it.
///
/// Load failures are returned as `Err`; schema violations are the `Ok` list.
pub fn check_file(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let document = load_document(path)?;
    Ok(validate(&document))
}
