use serde::{Deserialize, Serialize};

use calc_session::FieldState;
use shape_types::{ShapeCategory, ShapeFamily, ValueMap};

/// Messages from the UI to the calculator engine.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    // -- Catalog --
    /// Request every topic with its field schema.
    ListShapes,
    /// Open the calculator for a topic, by catalog id.
    SelectShape { shape: String },

    // -- Calculator input --
    /// The user changed the text of one field.
    EditField { key: String, value: String },
    /// Empty every field of the open calculator.
    ClearInput,

    // -- Stateless --
    /// Solve a value map directly, without touching the open calculator.
    Solve {
        shape: String,
        #[serde(default)]
        known: ValueMap,
        #[serde(default)]
        preferred_key: Option<String>,
    },
}

/// Messages from the calculator engine to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// The topic catalog.
    ShapeList { shapes: Vec<ShapeInfo> },

    /// The open calculator's fields after a selection or edit.
    FieldsUpdated {
        shape: ShapeFamily,
        fields: Vec<FieldState>,
    },

    /// Result of a stateless solve.
    Solved {
        values: ValueMap,
        passes: usize,
        converged: bool,
    },

    /// An error occurred in the engine.
    Error { message: String },
}

/// Catalog entry for one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeInfo {
    pub shape: ShapeFamily,
    pub category: ShapeCategory,
    pub fields: Vec<FieldInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub key: String,
    pub label: String,
}

impl From<ShapeFamily> for ShapeInfo {
    fn from(shape: ShapeFamily) -> Self {
        Self {
            shape,
            category: shape.category(),
            fields: shape
                .fields()
                .iter()
                .map(|field| FieldInfo {
                    key: field.key.to_string(),
                    label: field.label.to_string(),
                })
                .collect(),
        }
    }
}
