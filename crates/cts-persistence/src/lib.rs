//! Persistence for the transfer pipeline: converted extracts on disk and
//! the destination's already-imported id list.

mod error;
mod extract;
mod imported;

pub use error::{PersistenceError, Result};
pub use extract::{CURRENT_SCHEMA_VERSION, Extract, hash_bytes, load_extract, save_extract};
pub use imported::load_imported_ids;
