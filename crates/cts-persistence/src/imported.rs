//! Already-imported object ids.
//!
//! The destination side exports the accession numbers it already holds as
//! a newline-delimited list; submission prunes against it.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{PersistenceError, Result};

/// Load a newline-delimited accession-number list. Blank lines and
/// `#`-prefixed comment lines are skipped.
pub fn load_imported_ids(path: &Path) -> Result<BTreeSet<String>> {
    let text = fs::read_to_string(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
