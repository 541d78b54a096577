//! Agent resolution: the disambiguation half of the transfer pipeline.
//!
//! This crate takes a normalized record and works out who the people on it
//! are:
//!
//! - **names**: splitting a free-text creator string into individual
//!   names, and guessing first/middle/last order within each
//! - **resolver**: artists, authors, and the optional editor with their
//!   biographical columns aligned positionally
//! - **oddities**: data-quality checks for the curator's review queue
//! - **diagnostics**: the injected sink those findings flow through
//!
//! Everything here is pure over its inputs; no I/O, no shared state.

pub mod diagnostics;
pub mod names;
pub mod oddities;
pub mod resolver;

pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticCategory, DiagnosticsSink, NullSink, TracingSink,
};
pub use names::{guess_name_order, looks_like_commas_between_names, unpack_agent_names};
pub use oddities::note_oddities;
pub use resolver::resolve_agents;
