use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Keys the builder writes; template extensions must not repeat them.
pub const JOB_SPEC_BUILT_KEYS: &[&str] = &["params", "dependency_images", "disk_usage"];

/// Platform fields copied verbatim into every job specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSpecTemplate {
    pub imported_worker_files: Map<String, Value>,
    pub soft_time_limit: u64,
    pub time_limit: u64,
    pub command: String,
    pub post: Vec<String>,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl Default for JobSpecTemplate {
    fn default() -> Self {
        let mut imported_worker_files = Map::new();
        imported_worker_files.insert(
            "$HOME/verdi/etc/maap-dps.env".to_string(),
            json!("/maap-dps.env"),
        );
        imported_worker_files.insert("/tmp".to_string(), json!(["/tmp", "rw"]));
        Self {
            imported_worker_files,
            soft_time_limit: 86_400,
            time_limit: 86_400,
            command: "/app/dps_wrapper.sh".to_string(),
            post: vec!["hysds.triage.triage".to_string()],
            extensions: Map::new(),
        }
    }
}

/// The `job-spec.json.<algorithm>` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpecDocument {
    #[serde(flatten)]
    pub platform: JobSpecTemplate,
    pub params: Vec<JobParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependency_images: Vec<DependencyImage>,
    pub disk_usage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParam {
    pub name: String,
    pub destination: Destination,
}

/// How the platform hands a parameter value to the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Positional,
    Localize,
    Context,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyImage {
    pub container_image_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_image_url: Option<String>,
    #[serde(default)]
    pub container_mappings: Map<String, Value>,
}
