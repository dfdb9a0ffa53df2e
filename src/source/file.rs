//! Local file feed source.
//!
//! Mostly a development convenience: point cdv at a JSON file instead
//! of an HTTP endpoint. Resolves synchronously on the first poll.

use crate::model::{Company, FetchError};
use crate::parser;
use std::path::{Path, PathBuf};

/// One-shot file feed.
#[derive(Debug)]
pub struct FileFeed {
    path: PathBuf,
    delivered: bool,
}

impl FileFeed {
    /// Create a feed for the given path. Nothing is read until the
    /// first `poll()`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delivered: false,
        }
    }

    /// Read and parse the file; yields the result exactly once.
    pub fn poll(&mut self) -> Option<Result<Vec<Company>, FetchError>> {
        if self.delivered {
            return None;
        }
        self.delivered = true;
        Some(load(&self.path))
    }
}

fn load(path: &Path) -> Result<Vec<Company>, FetchError> {
    let body = std::fs::read_to_string(path).map_err(|e| FetchError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parser::parse_directory(&body)
}
