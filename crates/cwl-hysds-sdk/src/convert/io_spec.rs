use super::classify::io_type_tag;
use super::identifier::{duplicate_name_issues, entry_path, local_name};
use crate::documents::{WorkflowInputParameter, WorkflowRecord};
use crate::specs::{IoParam, IoSpecDocument, IoSpecTemplate, SUBMITTER_SOURCE};
use cwl_hysds_core::StructuredIssue;

#[derive(Debug, Clone, PartialEq)]
pub struct BuildIoSpecResult {
    pub document: IoSpecDocument,
    pub issues: Vec<StructuredIssue>,
}

pub fn build_io_spec(workflow: &WorkflowRecord, template: &IoSpecTemplate) -> BuildIoSpecResult {
    let params = workflow.inputs.iter().map(io_param).collect::<Vec<_>>();
    let mut issues = duplicate_name_issues(
        params.iter().zip(&workflow.inputs).enumerate().map(|(index, (param, input))| {
            (
                param.name.as_str(),
                entry_path(input.source_path.as_ref(), "inputs", index),
            )
        }),
        workflow.id.as_str(),
    );
    StructuredIssue::sort_stable(&mut issues);

    BuildIoSpecResult {
        document: IoSpecDocument {
            platform: template.clone(),
            label: workflow.label.clone(),
            description: workflow.doc.clone(),
            params,
        },
        issues,
    }
}

fn io_param(input: &WorkflowInputParameter) -> IoParam {
    IoParam {
        name: local_name(input.id.as_str()).to_string(),
        from: SUBMITTER_SOURCE.to_string(),
        placeholder: input.label.clone(),
        description: input.doc.clone(),
        default: input.default.as_ref().and_then(|value| value.to_param_text()),
        optional: input.type_expression.is_optional().then_some(true),
        type_tag: io_type_tag(&input.type_expression).map(str::to_string),
    }
}

#[cfg(test)]
#[path = "io_spec_test.rs"]
mod tests;
