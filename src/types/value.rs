//! Cell values.
//!
//! Rows are opaque field maps, so a cell value is a runtime scalar rather
//! than a typed column. Lookups of fields a row does not carry yield
//! [`Value::Absent`] instead of failing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Explicit "this row has no such field" marker.
    Absent,
}

impl Value {
    /// True if this is the absent marker.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Ordering used by the sort engine.
    ///
    /// Values of the same variant compare naturally; any cross-variant
    /// pair, any comparison involving [`Value::Absent`], and any
    /// non-comparable pair (NaN) is a tie. Ties let a stable sort keep
    /// the original relative order.
    #[must_use]
    pub fn grid_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Interpret raw editor input, detecting the value type:
    /// empty → [`Value::Absent`] (the field is cleared), `true`/`false`
    /// (case-insensitive) → boolean, parseable as `f64` → number,
    /// anything else → text.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Value::Absent;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return Value::Number(n);
        }
        Value::Text(input.to_string())
    }

    /// Display form used by editors pre-filling an input with the
    /// current cell content.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn display(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => {
                // Render integers without a trailing ".0"
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{n:.0}")
                } else {
                    n.to_string()
                }
            }
            Value::Bool(b) => b.to_string(),
            Value::Absent => String::new(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
