//! Row records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// A single data row: a stable identity plus an opaque field map.
///
/// The id is unique within a row set and never changes across sorts,
/// reorders, or edits. The engine never mutates a row's fields except
/// through [`crate::GridEngine::apply_edit`], which replaces one field
/// value on the row matching the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Stable identity, unique within the data set.
    pub id: u64,
    /// Field name → value. Fields not present read as [`Value::Absent`].
    pub fields: HashMap<String, Value>,
}

impl Row {
    /// Create an empty row with the given id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a field value. Unknown keys read as [`Value::Absent`]
    /// rather than an error; row shapes are caller-defined and may be
    /// ragged.
    #[must_use]
    pub fn get(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&Value::Absent)
    }

    /// Replace one field value in place, preserving identity.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }
}
