//! CLI library components for the collection transfer tool.

pub mod logging;
pub mod pipeline;
