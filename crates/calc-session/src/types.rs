use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shape_types::{ShapeFamily, UnknownShape};

/// Text shown in every field of the open calculator, keyed by field key.
pub type DisplayValues = BTreeMap<String, String>;

/// Display state of one calculator field, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    pub key: String,
    pub label: String,
    /// Text shown in the input box. Empty when the value is unknown.
    pub text: String,
    /// True when the user typed this value rather than the solver deriving it.
    pub manual: bool,
}

/// Errors from the calculator session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("shape {shape} has no field {key:?}")]
    UnknownField { shape: ShapeFamily, key: String },

    #[error(transparent)]
    UnknownShape(#[from] UnknownShape),
}
