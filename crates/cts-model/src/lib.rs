//! Collection transfer data model definitions.

pub mod agent;
pub mod record;
pub mod schema;
pub mod value;

pub use agent::{AgentRecord, AgentType, NameParts};
pub use record::ObjectRecord;
pub use schema::{ColumnSchema, ColumnSpec};
pub use value::FieldValue;
