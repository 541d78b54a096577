//! Normalized field values.

use serde::{Deserialize, Serialize};

/// A normalized value for one export column.
///
/// Columns declared repeating in the schema are always `Multi`, even when
/// only one value survived normalization; scalar columns are always
/// `Single`. Downstream code never has to branch on "list or string".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multi(Vec<String>),
}

impl FieldValue {
    /// The scalar value, or the first element of a sequence.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Multi(values) => values.first().map(String::as_str),
        }
    }

    /// Iterate over every element, scalar or sequence alike.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multi(values) => values.as_slice(),
        };
        slice.iter().map(String::as_str)
    }

    /// Number of elements (1 for scalars).
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(values) => values.len(),
        }
    }

    /// True when no element carries text.
    pub fn is_empty(&self) -> bool {
        self.values().all(str::is_empty)
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}
