use super::classify::type_destination;
use super::identifier::{duplicate_name_issues, entry_path, local_name};
use super::requirements::{resolve_requirements, RequirementOptions};
use crate::documents::{CommandInputParameter, CommandStepRecord};
use crate::specs::{Destination, JobParam, JobSpecDocument, JobSpecTemplate};
use cwl_hysds_core::StructuredIssue;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobSpecOptions {
    pub requirements: RequirementOptions,
    /// Appended to the template command as its final argument.
    pub remote_cwl_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildJobSpecResult {
    pub document: JobSpecDocument,
    pub issues: Vec<StructuredIssue>,
}

pub fn build_job_spec(
    tool: &CommandStepRecord,
    template: &JobSpecTemplate,
    options: &JobSpecOptions,
) -> BuildJobSpecResult {
    let params = tool.inputs.iter().map(job_param).collect::<Vec<_>>();
    let resolved = resolve_requirements(&tool.requirements, &options.requirements);

    let mut issues = duplicate_name_issues(
        params.iter().zip(&tool.inputs).enumerate().map(|(index, (param, input))| {
            (
                param.name.as_str(),
                entry_path(input.source_path.as_ref(), "inputs", index),
            )
        }),
        tool.id.as_str(),
    );
    issues.extend(
        resolved
            .issues
            .into_iter()
            .map(|issue| issue.with_source_id(tool.id.as_str())),
    );
    StructuredIssue::sort_stable(&mut issues);

    let mut platform = template.clone();
    if let Some(uri) = options.remote_cwl_uri.as_deref() {
        platform.command = command_with_argument(platform.command.as_str(), uri);
    }

    BuildJobSpecResult {
        document: JobSpecDocument {
            platform,
            params,
            dependency_images: resolved.dependency_images,
            disk_usage: resolved.disk_usage,
        },
        issues,
    }
}

fn job_param(input: &CommandInputParameter) -> JobParam {
    JobParam {
        name: local_name(input.id.as_str()).to_string(),
        destination: param_destination(input),
    }
}

/// A positional binding wins over anything the type would suggest.
pub fn param_destination(input: &CommandInputParameter) -> Destination {
    if input.is_positional() {
        return Destination::Positional;
    }
    type_destination(&input.type_expression)
}

fn command_with_argument(command: &str, argument: &str) -> String {
    if command.is_empty() {
        return argument.to_string();
    }
    format!("{command} {argument}")
}

#[cfg(test)]
#[path = "job_spec_test.rs"]
mod tests;
