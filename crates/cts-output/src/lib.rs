//! Output generation: `<imports>` documents for the destination service.

mod common;
mod import_xml;

pub use common::{COLLECTIONOBJECTS_NS, COLLECTIONOBJECTS_SCHEMA, ensure_output_dir, file_stem_for};
pub use import_xml::{write_import_file, write_import_files, write_import_xml};
