//! Line normalization: positional field assignment, repeat expansion, and
//! whitespace cleanup.

use cts_model::{ColumnSchema, FieldValue, ObjectRecord};

use crate::error::{IngestError, Result};

/// The character the export tool inserts between values of a repeating
/// field. FileMaker uses a vertical tab in tab-delimited exports; the
/// separator is configurable in case a site's export settings differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatSeparator(char);

impl RepeatSeparator {
    pub const fn new(separator: char) -> Self {
        Self(separator)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for RepeatSeparator {
    fn default() -> Self {
        Self('\u{000B}')
    }
}

/// Normalize one decoded export line against the column schema.
///
/// Cells are assigned to fields by position. Repeating fields are split on
/// the repeat separator with blank pieces dropped, and are always
/// represented as sequences; scalar fields stay scalar. Every value is
/// trimmed, and values empty after trimming are omitted from the record.
///
/// A cell count that differs from the schema length is a structural
/// problem the normalizer cannot repair; it surfaces as
/// [`IngestError::MalformedLine`] for the caller to log and skip.
pub fn normalize_line(
    line: &str,
    schema: &ColumnSchema,
    separator: RepeatSeparator,
) -> Result<ObjectRecord> {
    let cells: Vec<&str> = line.split('\t').collect();
    if cells.len() != schema.len() {
        return Err(IngestError::MalformedLine {
            expected: schema.len(),
            found: cells.len(),
        });
    }

    let mut record = ObjectRecord::new();
    for (spec, cell) in schema.iter().zip(&cells) {
        if spec.repeating {
            let pieces = split_repeats(cell, separator);
            if !pieces.is_empty() {
                record.insert(spec.name, FieldValue::Multi(pieces));
            }
        } else {
            let value = cell.trim();
            if !value.is_empty() {
                record.insert(spec.name, FieldValue::from(value));
            }
        }
    }
    Ok(record)
}

/// Split a repeating cell into its non-blank, trimmed pieces.
///
/// A cell without the separator yields at most one piece; a dangling
/// separator with nothing after it yields no extra piece.
pub fn split_repeats(cell: &str, separator: RepeatSeparator) -> Vec<String> {
    cell.split(separator.as_char())
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cts_model::ColumnSpec;

    const SEP: RepeatSeparator = RepeatSeparator::new('\u{000B}');

    fn small_schema() -> ColumnSchema {
        ColumnSchema::new(vec![
            ColumnSpec::repeating("title"),
            ColumnSpec::scalar("acc_no"),
            ColumnSpec::scalar("creator_text_inverted"),
        ])
    }

    #[test]
    fn repeating_field_expands() {
        let record = normalize_line("foo\u{000B}bar\t2011.1\tDoe, John", &small_schema(), SEP)
            .expect("normalize");
        assert_eq!(
            record.get("title"),
            Some(&FieldValue::Multi(vec![
                "foo".to_string(),
                "bar".to_string()
            ]))
        );
        assert_eq!(record.get_first("acc_no"), Some("2011.1"));
    }

    #[test]
    fn repeating_field_without_separator_is_singleton_sequence() {
        let record =
            normalize_line("foo\t2011.1\tDoe, John", &small_schema(), SEP).expect("normalize");
        assert_eq!(
            record.get("title"),
            Some(&FieldValue::Multi(vec!["foo".to_string()]))
        );
    }

    #[test]
    fn dangling_separator_leaves_no_blank_piece() {
        let record =
            normalize_line("foo\u{000B}\t2011.1\tSprat, Max \u{000B}", &small_schema(), SEP)
                .expect("normalize");
        assert_eq!(
            record.get("title"),
            Some(&FieldValue::Multi(vec!["foo".to_string()]))
        );
        // The scalar creator field keeps no trailing separator noise either:
        // the vertical tab counts as whitespace and trims away.
        assert_eq!(record.get_first("creator_text_inverted"), Some("Sprat, Max"));
    }

    #[test]
    fn values_are_trimmed_and_blanks_omitted() {
        let record =
            normalize_line(" foo \t 2011.404 \t   ", &small_schema(), SEP).expect("normalize");
        assert_eq!(
            record.get("title"),
            Some(&FieldValue::Multi(vec!["foo".to_string()]))
        );
        assert_eq!(record.get_first("acc_no"), Some("2011.404"));
        assert!(!record.contains("creator_text_inverted"));
    }

    #[test]
    fn wrong_cell_count_is_malformed() {
        let err = normalize_line("just\ttwo", &small_schema(), SEP).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MalformedLine {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn custom_separator() {
        let sep = RepeatSeparator::new('|');
        assert_eq!(split_repeats("a|b| ", sep), vec!["a", "b"]);
        assert_eq!(split_repeats("a\u{000B}b", sep), vec!["a\u{000B}b"]);
    }
}
