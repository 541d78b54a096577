//! Property tests for line normalization.

use cts_ingest::{RepeatSeparator, normalize_line, split_repeats};
use cts_model::{ColumnSchema, ColumnSpec};
use proptest::prelude::*;

fn schema() -> ColumnSchema {
    ColumnSchema::new(vec![
        ColumnSpec::repeating("title"),
        ColumnSpec::scalar("acc_no"),
        ColumnSpec::scalar("date"),
    ])
}

// Cell content free of structural characters (tabs, newlines, separator).
fn cell() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9,;./']{0,12}"
}

proptest! {
    #[test]
    fn no_value_leaves_with_surrounding_whitespace(a in cell(), b in cell(), c in cell()) {
        let line = format!("{a}\t{b}\t{c}");
        let record = normalize_line(&line, &schema(), RepeatSeparator::default()).unwrap();
        for name in record.field_names().collect::<Vec<_>>() {
            let value = record.get(name).unwrap();
            for piece in value.values() {
                prop_assert_eq!(piece, piece.trim());
                prop_assert!(!piece.is_empty());
            }
        }
    }

    #[test]
    fn trimming_is_idempotent(a in cell(), b in cell(), c in cell()) {
        let line = format!("{a}\t{b}\t{c}");
        let sep = RepeatSeparator::default();
        let once = normalize_line(&line, &schema(), sep).unwrap();
        // Re-normalizing the already-trimmed values changes nothing.
        let mut cells: Vec<String> = Vec::new();
        for spec in schema().iter() {
            let joined = once
                .get(spec.name)
                .map(|value| value.values().collect::<Vec<_>>().join("\u{000B}"))
                .unwrap_or_default();
            cells.push(joined);
        }
        let twice = normalize_line(&cells.join("\t"), &schema(), sep).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_nonblank_cell_is_retrievable(a in cell(), b in cell()) {
        let line = format!("{a}\t{b}\t1969");
        let record = normalize_line(&line, &schema(), RepeatSeparator::default()).unwrap();
        if !a.trim().is_empty() {
            prop_assert!(record.get("title").is_some());
            prop_assert!(record.get("title").unwrap().is_multi());
        } else {
            prop_assert!(record.get("title").is_none());
        }
        prop_assert_eq!(record.get_first("date"), Some("1969"));
    }

    #[test]
    fn split_repeats_never_yields_blanks(pieces in proptest::collection::vec(cell(), 0..5)) {
        let cell = pieces.join("\u{000B}");
        for piece in split_repeats(&cell, RepeatSeparator::default()) {
            prop_assert!(!piece.trim().is_empty());
            prop_assert_eq!(piece.trim().len(), piece.len());
        }
    }
}
