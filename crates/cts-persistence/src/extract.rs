//! Saved extracts: the converted record set between the convert and
//! submit stages.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use cts_model::ObjectRecord;

use crate::error::{PersistenceError, Result};

/// Newest extract layout this build can read.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// A converted record set, ready for submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extract {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    /// SHA-256 of the source export, for spotting a changed source file.
    pub source_hash: String,
    pub records: Vec<ObjectRecord>,
}

impl Extract {
    pub fn new(source_bytes: &[u8], records: Vec<ObjectRecord>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            source_hash: hash_bytes(source_bytes),
            records,
        }
    }
}

/// SHA-256 of the raw source export, hex encoded.
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Save an extract, atomically: write a temp file, sync, rename.
pub fn save_extract(extract: &Extract, path: &Path) -> Result<()> {
    let bytes =
        serde_json::to_vec_pretty(extract).map_err(|e| PersistenceError::Serialization { source: e })?;

    let temp_path = path.with_extension("json.tmp");
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;
    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), records = extract.records.len(), "saved extract");
    Ok(())
}

/// Load an extract, rejecting versions newer than this build understands.
pub fn load_extract(path: &Path) -> Result<Extract> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    let extract: Extract =
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::Deserialization {
            path: path.to_path_buf(),
            source: e,
        })?;
    if extract.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: extract.schema_version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }
    Ok(extract)
}
