//! Batch planning for a submission run.
//!
//! Records already present in the destination are pruned, and the remainder
//! is ordered so single-artist records go first. Artists past the first one
//! or two on a record tend to carry no biographical detail, but the same
//! artist may appear alone elsewhere in the collection with that detail
//! intact, so submitting the single-artist records first gives the service
//! the richer version of each person before the bare one.

use std::collections::BTreeSet;

use tracing::debug;

use cts_model::{AgentType, ObjectRecord};

/// Drop records whose accession number is already in the destination.
///
/// Records without an accession number are kept; they cannot be matched
/// against the imported set.
#[must_use]
pub fn prune_imported(
    records: Vec<ObjectRecord>,
    imported: &BTreeSet<String>,
) -> Vec<ObjectRecord> {
    let before = records.len();
    let remaining: Vec<ObjectRecord> = records
        .into_iter()
        .filter(|record| {
            record
                .acc_no()
                .is_none_or(|acc_no| !imported.contains(acc_no))
        })
        .collect();
    debug!(
        "Pruned {} already-imported records, {} remaining",
        before - remaining.len(),
        remaining.len()
    );
    remaining
}

/// Split records into (single-artist, multi-artist) batches.
///
/// Records with zero or one artist land in the first batch.
#[must_use]
pub fn split_by_artist_count(
    records: Vec<ObjectRecord>,
) -> (Vec<ObjectRecord>, Vec<ObjectRecord>) {
    records.into_iter().partition(|record| {
        record
            .agents
            .iter()
            .filter(|agent| agent.agent_type == AgentType::Artist)
            .count()
            <= 1
    })
}
