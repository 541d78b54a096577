//! Object records produced by the field normalizer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::agent::AgentRecord;
use crate::value::FieldValue;

/// One normalized export row: field name to value, plus the agents resolved
/// from its creator/author/editor columns.
///
/// Cells that were empty after trimming are omitted; presence is an
/// `Option` at the accessors rather than a stored empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    fields: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub agents: Vec<AgentRecord>,
}

impl ObjectRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Scalar value, or first element of a sequence.
    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::first)
    }

    /// Like [`get_first`](Self::get_first), but treats blank text as absent.
    pub fn get_nonempty(&self, name: &str) -> Option<&str> {
        self.get_first(name).filter(|value| !value.trim().is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Accession number, the destination system's object identifier.
    pub fn acc_no(&self) -> Option<&str> {
        self.get_nonempty("acc_no")
    }

    /// Source database object id, used to key diagnostics.
    pub fn object_id(&self) -> &str {
        self.get_first("object_id").unwrap_or("<no object_id>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_distinguish_absent_and_blank() {
        let mut record = ObjectRecord::new();
        record.insert("title", FieldValue::from("foo"));
        record.insert("signature", FieldValue::from("  "));

        assert_eq!(record.get_first("title"), Some("foo"));
        assert_eq!(record.get_first("missing"), None);
        assert_eq!(record.get_first("signature"), Some("  "));
        assert_eq!(record.get_nonempty("signature"), None);
        assert!(record.contains("signature"));
    }

    #[test]
    fn object_id_has_a_fallback() {
        let record = ObjectRecord::new();
        assert_eq!(record.object_id(), "<no object_id>");
    }
}
