//! Export ingestion: the field-normalizer half of the transfer pipeline.
//!
//! This crate turns one raw line of the legacy tab-delimited export into a
//! normalized [`ObjectRecord`](cts_model::ObjectRecord):
//!
//! - **Decoding**: the export arrives in Mac OS Roman and is re-decoded to
//!   UTF-8 before any other processing
//! - **Normalization**: positional field assignment against the column
//!   schema, repeat-separator expansion, whitespace trimming
//! - **Reading**: whole-file helper that understands classic-Mac line
//!   endings

mod decode;
mod error;
mod normalize;
mod reader;

pub use decode::decode_mac_roman;
pub use error::{IngestError, Result};
pub use normalize::{RepeatSeparator, normalize_line, split_repeats};
pub use reader::read_export;
