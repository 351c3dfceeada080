use cwl_hysds_core::{FieldPath, IssueSeverity, StructuredIssue};
use cwl_hysds_sdk::{
    IoSpecTemplate, JobSpecTemplate, DEFAULT_DISK_GB, IO_SPEC_BUILT_KEYS, JOB_SPEC_BUILT_KEYS,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const CONVERTER_CONFIG_SCHEMA: &str = "cwl-hysds/0.0.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default = "default_converter_schema")]
    pub schema: String,
    #[serde(default)]
    pub io_spec: IoSpecTemplate,
    #[serde(default)]
    pub job_spec: JobSpecTemplate,
    #[serde(default = "default_disk_gb")]
    pub default_disk_gb: u64,
    /// Used when `--docker-uri` is empty.
    #[serde(default)]
    pub docker_uri: Option<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            schema: default_converter_schema(),
            io_spec: IoSpecTemplate::default(),
            job_spec: JobSpecTemplate::default(),
            default_disk_gb: DEFAULT_DISK_GB,
            docker_uri: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConverterConfigError {
    #[error("read converter config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("converter config parse failed: {0}")]
    Parse(String),
    #[error("converter config validation failed: {0:?}")]
    Validation(Vec<StructuredIssue>),
}

pub fn load_converter_config(path: &Path) -> Result<ConverterConfig, ConverterConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConverterConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(ConverterConfigError::Parse)?;
    let config: ConverterConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str()).map_err(|error| {
            ConverterConfigError::Parse(format!("json decode error: {error}"))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str()).map_err(|error| {
            ConverterConfigError::Parse(format!("yaml decode error: {error}"))
        })?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| ConverterConfigError::Parse(error.to_string()))?,
    };

    let mut issues = validate_converter_config(&config);
    StructuredIssue::sort_stable(&mut issues);
    if !issues.is_empty() {
        return Err(ConverterConfigError::Validation(issues));
    }
    Ok(config)
}

pub fn validate_converter_config(config: &ConverterConfig) -> Vec<StructuredIssue> {
    let mut issues = Vec::<StructuredIssue>::new();
    if config.schema != CONVERTER_CONFIG_SCHEMA {
        issues.push(config_issue(
            "converter.config.schema",
            FieldPath::root().key("schema"),
            format!(
                "unsupported converter config schema `{}` (expected `{CONVERTER_CONFIG_SCHEMA}`)",
                config.schema
            ),
        ));
    }
    if config.default_disk_gb == 0 {
        issues.push(config_issue(
            "converter.config.default_disk_gb",
            FieldPath::root().key("default_disk_gb"),
            "default_disk_gb must be > 0".to_string(),
        ));
    }
    if config.io_spec.submission_type.trim().is_empty() {
        issues.push(config_issue(
            "converter.config.io_spec.submission_type",
            FieldPath::root().key("io_spec").key("submission_type"),
            "io_spec.submission_type must not be empty".to_string(),
        ));
    }
    built_key_issues(
        &config.io_spec.extensions,
        IO_SPEC_BUILT_KEYS,
        "io_spec",
        &mut issues,
    );

    let job_path = FieldPath::root().key("job_spec");
    if config.job_spec.command.trim().is_empty() {
        issues.push(config_issue(
            "converter.config.job_spec.command",
            job_path.key("command"),
            "job_spec.command must not be empty".to_string(),
        ));
    }
    if config.job_spec.soft_time_limit > config.job_spec.time_limit {
        issues.push(config_issue(
            "converter.config.job_spec.time_limits",
            job_path.key("soft_time_limit"),
            format!(
                "soft_time_limit ({}) must not exceed time_limit ({})",
                config.job_spec.soft_time_limit, config.job_spec.time_limit
            ),
        ));
    }
    built_key_issues(
        &config.job_spec.extensions,
        JOB_SPEC_BUILT_KEYS,
        "job_spec",
        &mut issues,
    );

    issues
}

/// Builder-owned keys would be serialized twice if an override carried them.
fn built_key_issues(
    extensions: &Map<String, Value>,
    built_keys: &[&str],
    section: &str,
    issues: &mut Vec<StructuredIssue>,
) {
    for key in built_keys.iter().filter(|key| extensions.contains_key(**key)) {
        issues.push(config_issue(
            format!("converter.config.{section}.reserved_key").as_str(),
            FieldPath::root().key(section).key(*key),
            format!("{section}.{key} is generated from the CWL document and cannot be overridden"),
        ));
    }
}

fn config_issue(reference: &str, field_path: FieldPath, message: String) -> StructuredIssue {
    StructuredIssue::new(
        "converter_config_error",
        IssueSeverity::Error,
        field_path,
        message,
        reference,
    )
}

fn default_converter_schema() -> String {
    CONVERTER_CONFIG_SCHEMA.to_string()
}

fn default_disk_gb() -> u64 {
    DEFAULT_DISK_GB
}

/// Replaces `${NAME}` with the environment value. `${NAME:-fallback}` uses
/// `fallback` when `NAME` is unset.
fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut expanded = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find("${") {
        expanded.push_str(&rest[..open]);
        let body_start = open + 2;
        let close = rest[body_start..]
            .find('}')
            .map(|offset| body_start + offset)
            .ok_or_else(|| "unterminated env placeholder `${...`".to_string())?;
        let body = &rest[body_start..close];
        let (name, fallback) = match body.split_once(":-") {
            Some((name, fallback)) => (name, Some(fallback)),
            None => (body, None),
        };
        if name.is_empty() {
            return Err(format!("empty env placeholder `${{{body}}}`"));
        }
        match (std::env::var(name), fallback) {
            (Ok(value), _) => expanded.push_str(value.as_str()),
            (Err(_), Some(fallback)) => expanded.push_str(fallback),
            (Err(_), None) => {
                return Err(format!("missing env var for placeholder `${{{name}}}`"));
            }
        }
        rest = &rest[close + 1..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
