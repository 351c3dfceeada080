use super::{DefaultValue, TypeExpression};
use cwl_hysds_core::FieldPath;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub inputs: Vec<WorkflowInputParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInputParameter {
    pub id: String,
    #[serde(rename = "type")]
    pub type_expression: TypeExpression,
    #[serde(default)]
    pub default: Option<DefaultValue>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(skip)]
    pub source_path: Option<FieldPath>,
}
