use crate::cli::Cli;
use crate::config::{load_converter_config, ConverterConfig, ConverterConfigError};
use crate::io::{read_document_source, write_spec_files, SpecOutputPaths, SpecWriteError};
use crate::logging::log_issues;
use cwl_hysds_core::StructuredIssue;
use cwl_hysds_sdk::{
    convert, load_document_set, local_name, ConvertOptions, JobSpecOptions, RequirementOptions,
    SelectionError,
};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("converter config load failed: {0}")]
    Config(#[from] ConverterConfigError),
    #[error("source document unavailable: {}", .0.message)]
    Source(StructuredIssue),
    #[error("source document load failed: {}", render_issues(.0))]
    DocumentLoad(Vec<StructuredIssue>),
    #[error("conversion failed: {0}")]
    Selection(#[from] SelectionError),
    #[error("current directory unavailable: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
    #[error(transparent)]
    Write(#[from] SpecWriteError),
}

/// Outcome of one conversion: where the files went and what was noticed.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub output_dir: PathBuf,
    pub paths: SpecOutputPaths,
    pub workflow_id: String,
    pub issues: Vec<StructuredIssue>,
}

impl ConvertReport {
    pub fn workflow_name(&self) -> &str {
        local_name(self.workflow_id.as_str())
    }
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated hysds-io.json and job-spec.json in {}",
            self.output_dir.display()
        )
    }
}

pub fn execute_convert(cli: &Cli) -> Result<ConvertReport, RunnerError> {
    let cwd = std::env::current_dir().map_err(RunnerError::CurrentDir)?;
    execute_convert_in(cli, cwd.as_path())
}

/// Runs one conversion with relative paths resolved against `cwd`. Nothing is
/// written unless both documents were built and encoded.
pub fn execute_convert_in(cli: &Cli, cwd: &Path) -> Result<ConvertReport, RunnerError> {
    let config = match &cli.config {
        Some(path) => load_converter_config(resolve_path(cwd, path).as_path())?,
        None => ConverterConfig::default(),
    };

    let loaded_source =
        read_document_source(cli.cwl_file.as_str(), cwd).map_err(RunnerError::Source)?;
    tracing::debug!(
        path = %loaded_source.source.path.display(),
        base_uri = loaded_source.source.base_uri.as_str(),
        "read source document"
    );

    let loaded = load_document_set(
        loaded_source.text.as_str(),
        loaded_source.source.base_uri.as_str(),
    )
    .map_err(|issues| {
        log_issues(&issues);
        RunnerError::DocumentLoad(issues)
    })?;
    log_issues(&loaded.issues);

    let options = convert_options(cli, &config);
    let output = convert(&loaded.documents, &options)?;
    log_issues(&output.issues);
    tracing::info!(
        workflow = output.workflow_name(),
        algorithm = cli.algorithm_name.as_str(),
        "converted workflow"
    );

    let io_spec_json = serde_json::to_string_pretty(&output.io_spec)?;
    let job_spec_json = serde_json::to_string_pretty(&output.job_spec)?;

    let output_dir = match &cli.output_dir {
        Some(dir) => resolve_path(cwd, dir),
        None => cwd.to_path_buf(),
    };
    let paths = SpecOutputPaths::new(output_dir.as_path(), cli.algorithm_name.as_str());
    write_spec_files(&paths, io_spec_json.as_str(), job_spec_json.as_str())?;
    tracing::info!(
        io_spec = %paths.io_spec.display(),
        job_spec = %paths.job_spec.display(),
        "wrote specifications"
    );

    let mut issues = loaded.issues;
    issues.extend(output.issues);
    Ok(ConvertReport {
        output_dir,
        paths,
        workflow_id: output.workflow_id,
        issues,
    })
}

/// The CLI `--docker-uri` wins when non-empty, then the config value.
fn convert_options(cli: &Cli, config: &ConverterConfig) -> ConvertOptions {
    let fallback_container_uri = if cli.docker_uri.is_empty() {
        config.docker_uri.clone().unwrap_or_default()
    } else {
        cli.docker_uri.clone()
    };
    ConvertOptions {
        io_template: config.io_spec.clone(),
        job_template: config.job_spec.clone(),
        job: JobSpecOptions {
            requirements: RequirementOptions {
                fallback_container_uri,
                default_disk_gb: config.default_disk_gb,
            },
            remote_cwl_uri: cli.remote_cwl_uri.clone(),
        },
    }
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn render_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(|issue| match issue.reference.as_deref() {
            Some(reference) => format!("{reference} at {}: {}", issue.field_path, issue.message),
            None => format!("{}: {}", issue.field_path, issue.message),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
