//! Result types shared between commands and the summary printer.

use std::path::PathBuf;

use cts_cli::pipeline::ConvertStats;

/// Outcome of the `convert` command.
pub struct ConvertResult {
    /// Source export path.
    pub source: PathBuf,
    /// Where the extract was written.
    pub output: PathBuf,
    /// Run counters and findings.
    pub stats: ConvertStats,
}

/// Outcome of one record in a submission run.
pub struct SubmitFailure {
    /// Object identifier of the record.
    pub object: String,
    /// Why it was not accepted.
    pub reason: String,
}

/// Outcome of the `submit` command.
pub struct SubmitResult {
    /// Records in the extract before pruning.
    pub total: usize,
    /// Records skipped because the destination already holds them.
    pub already_imported: usize,
    /// Records accepted by the service (or written in a dry run).
    pub submitted: usize,
    /// Records the service rejected.
    pub failures: Vec<SubmitFailure>,
    /// Where dry-run documents were written, if this was a dry run.
    pub dry_run_dir: Option<PathBuf>,
}

impl SubmitResult {
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}
