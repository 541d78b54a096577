//! Shared output helpers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Namespace of the destination service's common collection-object schema.
pub const COLLECTIONOBJECTS_NS: &str = "http://collectionspace.org/collectionobject/";

/// Schema name the imports service expects.
pub const COLLECTIONOBJECTS_SCHEMA: &str = "collectionobjects_common";

/// Create (if needed) and return a subdirectory of the output directory.
pub fn ensure_output_dir(output_dir: &Path, name: &str) -> Result<PathBuf> {
    let dir = output_dir.join(name);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Turn an accession number into a safe file stem.
pub fn file_stem_for(acc_no: &str) -> String {
    let stem: String = acc_no
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() { "object".to_string() } else { stem }
}
