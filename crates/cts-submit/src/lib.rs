//! Submission of normalized object records to the destination service.
//!
//! The crate covers two concerns: planning a batch (pruning records the
//! destination already holds and ordering single-artist records first) and
//! the blocking HTTP client that POSTs each import document.

pub mod client;
pub mod error;
pub mod plan;

pub use client::{Credentials, ImportClient};
pub use error::{Result, SubmitError};
pub use plan::{prune_imported, split_by_artist_count};
