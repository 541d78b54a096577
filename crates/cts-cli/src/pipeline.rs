//! Convert pipeline: read the export, normalize each line, resolve agents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use cts_ingest::{IngestError, RepeatSeparator, normalize_line, read_export};
use cts_model::{ColumnSchema, ObjectRecord};
use cts_persistence::Extract;
use cts_transform::{CollectingSink, Diagnostic, note_oddities, resolve_agents};

/// Counters and findings from one conversion run.
#[derive(Debug, Default)]
pub struct ConvertStats {
    /// Logical lines in the export.
    pub lines: usize,
    /// Records successfully normalized.
    pub records: usize,
    /// Lines skipped because their cell count did not match the schema.
    pub malformed: usize,
    /// Agents resolved across all records.
    pub agents: usize,
    /// Data-quality findings for the review queue.
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of converting one export file.
pub struct ConvertOutcome {
    /// The saved record set, ready for submission.
    pub extract: Extract,
    /// Run counters and findings.
    pub stats: ConvertStats,
}

/// Convert a tab-delimited export into an [`Extract`].
///
/// Malformed lines are logged and skipped; any other ingest problem is
/// fatal. Agent resolution and oddity checks run per record, with their
/// findings collected for the end-of-run summary.
pub fn convert_export(path: &Path, separator: RepeatSeparator) -> Result<ConvertOutcome> {
    let source_bytes =
        fs::read(path).with_context(|| format!("read export {}", path.display()))?;
    let lines = read_export(path)?;
    let schema = ColumnSchema::standard();
    let sink = CollectingSink::new();

    let mut records: Vec<ObjectRecord> = Vec::with_capacity(lines.len());
    let mut malformed = 0usize;
    for (index, line) in lines.iter().enumerate() {
        match normalize_line(line, &schema, separator) {
            Ok(mut record) => {
                record.agents = resolve_agents(&record, &sink);
                note_oddities(&record, &sink);
                records.push(record);
            }
            Err(error @ IngestError::MalformedLine { .. }) => {
                warn!(line = index + 1, %error, "skipping malformed line");
                malformed += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }

    let stats = ConvertStats {
        lines: lines.len(),
        records: records.len(),
        malformed,
        agents: records.iter().map(|record| record.agents.len()).sum(),
        diagnostics: sink.take(),
    };
    info!(
        lines = stats.lines,
        records = stats.records,
        malformed = stats.malformed,
        agents = stats.agents,
        findings = stats.diagnostics.len(),
        "conversion complete"
    );

    Ok(ConvertOutcome {
        extract: Extract::new(&source_bytes, records),
        stats,
    })
}
