use cwl_hysds_core::FieldPath;
use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const DOCKER_REQUIREMENT_CLASS: &str = "DockerRequirement";
pub const RESOURCE_REQUIREMENT_CLASS: &str = "ResourceRequirement";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum Requirement {
    #[serde(rename = "DockerRequirement")]
    Container(ContainerRequirement),
    #[serde(rename = "ResourceRequirement")]
    Resource(ResourceRequirement),
}

impl Requirement {
    /// Where the requirement sits inside its process record, when it was loaded
    /// from a document.
    pub fn source_path(&self) -> Option<&FieldPath> {
        match self {
            Requirement::Container(container) => container.source_path.as_ref(),
            Requirement::Resource(resource) => resource.source_path.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRequirement {
    #[serde(rename = "dockerPull")]
    pub pull: String,
    #[serde(rename = "dockerImport", default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    #[serde(skip)]
    pub source_path: Option<FieldPath>,
}

/// Resource values are kept as written; CWL allows numbers, numeric strings
/// and expressions here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceValue {
    Number(Number),
    Text(String),
}

impl ResourceValue {
    /// Whole, non-negative quantity. `20`, `20.0` and `" 20 "` qualify;
    /// `20.5`, `-1` and `$(inputs.size)` do not.
    pub fn as_whole_number(&self) -> Option<u64> {
        match self {
            ResourceValue::Number(number) => number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.is_finite() && *value >= 0.0 && value.fract() == 0.0)
                    .filter(|value| *value <= u64::MAX as f64)
                    .map(|value| value as u64)
            }),
            ResourceValue::Text(text) => text.trim().parse::<u64>().ok(),
        }
    }
}

impl std::fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceValue::Number(number) => write!(f, "{number}"),
            ResourceValue::Text(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceRequirement {
    #[serde(rename = "outdirMax", default, skip_serializing_if = "Option::is_none")]
    pub outdir_max: Option<ResourceValue>,
    #[serde(rename = "ramMin", default, skip_serializing_if = "Option::is_none")]
    pub ram_min: Option<ResourceValue>,
    #[serde(rename = "coresMin", default, skip_serializing_if = "Option::is_none")]
    pub cores_min: Option<ResourceValue>,
    #[serde(skip)]
    pub source_path: Option<FieldPath>,
}
