//! Variable reference models.

use super::position::Range;
use serde::{Deserialize, Serialize};

/// Whether a reference reads or writes the variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableReferenceType {
    Read,
    Write,
}

/// Scope a referenced variable belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableType {
    Environment,
    Runtime,
    Global,
    Folder,
    Collection,
    Request,
    ProcessEnv,
    /// No declared type is known, e.g. for `{{name}}` interpolation
    Unknown,
}

/// An occurrence of a variable inside block content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableReference {
    pub variable_name: String,
    pub variable_name_range: Range,
    pub reference_type: VariableReferenceType,
    pub variable_type: VariableType,
}

impl VariableReference {
    pub fn new(
        variable_name: impl Into<String>,
        variable_name_range: Range,
        reference_type: VariableReferenceType,
        variable_type: VariableType,
    ) -> Self {
        Self {
            variable_name: variable_name.into(),
            variable_name_range,
            reference_type,
            variable_type,
        }
    }

    pub fn is_write(&self) -> bool {
        self.reference_type == VariableReferenceType::Write
    }
}
