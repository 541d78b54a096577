//! The export's fixed column layout.

use serde::{Deserialize, Serialize};

/// One export column: its field name and whether the source tool may pack
/// several values into the cell behind a repeat separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub repeating: bool,
}

impl ColumnSpec {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            repeating: false,
        }
    }

    pub const fn repeating(name: &'static str) -> Self {
        Self {
            name,
            repeating: true,
        }
    }
}

/// Ordered column schema. Position must match the export exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<ColumnSpec>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// The built-in layout of the legacy collection-database export.
    pub fn standard() -> Self {
        Self::new(STANDARD_COLUMNS.to_vec())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    pub fn is_repeating(&self, name: &str) -> bool {
        self.columns
            .iter()
            .any(|column| column.name == name && column.repeating)
    }
}

// Order matters: it mirrors the field order of the legacy export.
const STANDARD_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::repeating("condition"),
    ColumnSpec::repeating("condition_date"),
    ColumnSpec::repeating("iaia_subject"),
    ColumnSpec::scalar("running_time"),
    ColumnSpec::repeating("width"),
    ColumnSpec::repeating("depth"),
    ColumnSpec::repeating("height"),
    ColumnSpec::scalar("dim_description"),
    ColumnSpec::scalar("dimensions"),
    ColumnSpec::repeating("weight"),
    ColumnSpec::repeating("edition"),
    ColumnSpec::scalar("cast_no"),
    ColumnSpec::scalar("signature"),
    ColumnSpec::repeating("workshop_number"),
    ColumnSpec::repeating("signed_location"),
    ColumnSpec::repeating("printers_marks"),
    ColumnSpec::scalar("foundry_marking"),
    ColumnSpec::repeating("inscription_location"),
    ColumnSpec::repeating("medium"),
    ColumnSpec::repeating("support"),
    ColumnSpec::repeating("description"),
    ColumnSpec::repeating("sex"),
    ColumnSpec::scalar("genre"),
    ColumnSpec::scalar("iaia_style"),
    ColumnSpec::scalar("unique_frame"),
    ColumnSpec::repeating("frame"),
    ColumnSpec::scalar("number_of_pages"),
    ColumnSpec::scalar("vol_no"),
    ColumnSpec::scalar("binding"),
    ColumnSpec::scalar("slipcase"),
    ColumnSpec::scalar("master"),
    ColumnSpec::scalar("submaster"),
    ColumnSpec::repeating("portfolio"),
    ColumnSpec::scalar("media"),
    ColumnSpec::scalar("related_material_location"),
    ColumnSpec::scalar("acc_no"),
    ColumnSpec::scalar("old_acc_no"),
    ColumnSpec::scalar("lc_no"),
    ColumnSpec::scalar("object_id"),
    ColumnSpec::scalar("classification"),
    ColumnSpec::scalar("status"),
    ColumnSpec::repeating("title"),
    ColumnSpec::repeating("credit_line"),
    ColumnSpec::scalar("initial_value"),
    ColumnSpec::scalar("initial_price"),
    ColumnSpec::repeating("current_value"),
    ColumnSpec::repeating("valuation_date"),
    ColumnSpec::repeating("valuation_source"),
    ColumnSpec::repeating("source"),
    ColumnSpec::scalar("date"),
    ColumnSpec::scalar("catalog_raisonne_ref"),
    ColumnSpec::scalar("fabricator"),
    ColumnSpec::scalar("foundry"),
    ColumnSpec::repeating("printer"),
    ColumnSpec::repeating("publisher"),
    ColumnSpec::scalar("editor"),
    ColumnSpec::scalar("creator_text_inverted"),
    ColumnSpec::scalar("author"),
    ColumnSpec::scalar("author_birth_year"),
    ColumnSpec::scalar("born"),
    ColumnSpec::scalar("author_death_year"),
    ColumnSpec::scalar("died"),
    ColumnSpec::repeating("author_gender"),
    ColumnSpec::scalar("mnartist"),
    ColumnSpec::scalar("ethnicity"),
    ColumnSpec::scalar("author_nationality"),
    ColumnSpec::scalar("nationality"),
    ColumnSpec::repeating("author_birth_place"),
    ColumnSpec::repeating("birth_place"),
    ColumnSpec::scalar("last_name"),
    ColumnSpec::scalar("reproduction_rights"),
];
