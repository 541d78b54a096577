//! Agent records: the people associated with a collection object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a person plays for a collection object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    Artist,
    Author,
    Editor,
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Artist => "artist",
            Self::Author => "author",
            Self::Editor => "editor",
        };
        f.write_str(label)
    }
}

/// A structured person record resolved from the export's free-text name
/// columns and their parallel biographical columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub agent_type: AgentType,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub born: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub died: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
}

impl AgentRecord {
    pub fn new(agent_type: AgentType, last_name: impl Into<String>) -> Self {
        Self {
            agent_type,
            last_name: last_name.into(),
            first_name: None,
            middle_name: None,
            born: None,
            died: None,
            sex: None,
            nationality: None,
            ethnicity: None,
            birth_place: None,
        }
    }

    /// Strip surrounding whitespace from every string field.
    pub fn trim_in_place(&mut self) {
        fn trim(value: &mut String) {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
            }
        }
        trim(&mut self.last_name);
        for field in [
            &mut self.first_name,
            &mut self.middle_name,
            &mut self.born,
            &mut self.died,
            &mut self.sex,
            &mut self.nationality,
            &mut self.ethnicity,
            &mut self.birth_place,
        ]
        .into_iter()
        .flatten()
        {
            trim(field);
        }
    }

    /// "First Middle Last" form, falling back to the surname alone.
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(first) = self.first_name.as_deref() {
            parts.push(first);
        }
        if let Some(middle) = self.middle_name.as_deref() {
            parts.push(middle);
        }
        parts.push(self.last_name.as_str());
        parts.join(" ")
    }
}

/// Result of name-order guessing, before a role is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameParts {
    pub last_name: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
}

impl NameParts {
    pub fn surname_only(last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: None,
            middle_name: None,
        }
    }

    pub fn into_agent(self, agent_type: AgentType) -> AgentRecord {
        AgentRecord {
            first_name: self.first_name,
            middle_name: self.middle_name,
            ..AgentRecord::new(agent_type, self.last_name)
        }
    }
}
