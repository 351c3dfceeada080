use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SUBMITTER_SOURCE: &str = "submitter";

/// Keys the builder writes; template extensions must not repeat them.
pub const IO_SPEC_BUILT_KEYS: &[&str] = &["label", "description", "params"];

/// Platform fields copied verbatim into every IO specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoSpecTemplate {
    pub component: String,
    pub submission_type: String,
    pub enable_dedup: bool,
    #[serde(rename = "action-type")]
    pub action_type: String,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl Default for IoSpecTemplate {
    fn default() -> Self {
        Self {
            component: "tosca".to_string(),
            submission_type: "individual".to_string(),
            enable_dedup: false,
            action_type: "both".to_string(),
            extensions: Map::new(),
        }
    }
}

/// The `hysds-io.json.<algorithm>` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoSpecDocument {
    #[serde(flatten)]
    pub platform: IoSpecTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub params: Vec<IoParam>,
}

/// One submitter-facing parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoParam {
    pub name: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Only ever `Some(true)`; required parameters omit the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
}
