use super::{Requirement, TypeExpression};
use cwl_hysds_core::FieldPath;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandStepRecord {
    pub id: String,
    #[serde(default)]
    pub inputs: Vec<CommandInputParameter>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandInputParameter {
    pub id: String,
    #[serde(rename = "type")]
    pub type_expression: TypeExpression,
    #[serde(rename = "inputBinding", default)]
    pub input_binding: Option<InputBinding>,
    /// Location inside the process record, e.g. `$.inputs.scene`.
    #[serde(skip)]
    pub source_path: Option<FieldPath>,
}

impl CommandInputParameter {
    /// True when the binding places the value by position. Position `0` counts.
    pub fn is_positional(&self) -> bool {
        self.input_binding
            .as_ref()
            .is_some_and(|binding| binding.position.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputBinding {
    #[serde(default)]
    pub position: Option<i64>,
}
