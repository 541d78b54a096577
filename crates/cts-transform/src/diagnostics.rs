//! Diagnostics reporting for data-quality findings.
//!
//! The resolver and the oddity checks never fail on messy data; they hand
//! findings to an injected sink and carry on. The driver decides where the
//! reports go.

use std::fmt;
use std::sync::Mutex;

/// Category of a data-quality finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCategory {
    /// More biographical values than names, or similar positional mismatch.
    Alignment,
    /// A parsed surname contains characters that suggest a bad split.
    WeirdName,
    /// A running time that does not mention minutes.
    RunningTime,
    /// Digits in the ethnicity field.
    Ethnicity,
    /// Frame value outside the known vocabulary.
    Frame,
    /// Copyright boilerplate in the editor field.
    Editor,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Alignment => "alignment",
            Self::WeirdName => "weird-name",
            Self::RunningTime => "running-time",
            Self::Ethnicity => "ethnicity",
            Self::Frame => "frame",
            Self::Editor => "editor",
        };
        f.write_str(label)
    }
}

/// Receiver for data-quality findings, keyed by the source object id.
pub trait DiagnosticsSink {
    fn report(&self, category: DiagnosticCategory, object_id: &str, message: &str);
}

/// Routes findings to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, category: DiagnosticCategory, object_id: &str, message: &str) {
        tracing::warn!(category = %category, object_id, "{message}");
    }
}

/// Discards findings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn report(&self, _category: DiagnosticCategory, _object_id: &str, _message: &str) {}
}

/// One captured finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub object_id: String,
    pub message: String,
}

/// Collects findings in memory, for tests and for end-of-run summaries.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().expect("diagnostics lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the captured findings.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.reports.lock().expect("diagnostics lock"))
    }
}

impl DiagnosticsSink for CollectingSink {
    fn report(&self, category: DiagnosticCategory, object_id: &str, message: &str) {
        self.reports
            .lock()
            .expect("diagnostics lock")
            .push(Diagnostic {
                category,
                object_id: object_id.to_string(),
                message: message.to_string(),
            });
    }
}
