use crate::documents::{CommandStepRecord, DocumentSet, WorkflowRecord};
use cwl_hysds_core::{FieldPath, IssueSeverity, StructuredIssue};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no Workflow record found in {base_uri}")]
    MissingWorkflow { base_uri: String },
    #[error("no CommandLineTool record found in {base_uri}")]
    MissingCommandLineTool { base_uri: String },
}

#[derive(Debug, Clone, Copy)]
pub struct SelectedRecords<'a> {
    pub workflow: &'a WorkflowRecord,
    pub tool: &'a CommandStepRecord,
}

#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub records: SelectedRecords<'a>,
    pub issues: Vec<StructuredIssue>,
}

/// Picks the workflow and command line tool to convert. With several of a
/// kind the last in document order is used.
pub fn select_records(documents: &DocumentSet) -> Result<Selection<'_>, SelectionError> {
    let workflows = documents.workflows().collect::<Vec<_>>();
    let tools = documents.command_line_tools().collect::<Vec<_>>();

    let workflow = *workflows.last().ok_or_else(|| SelectionError::MissingWorkflow {
        base_uri: documents.base_uri.clone(),
    })?;
    let tool = *tools
        .last()
        .ok_or_else(|| SelectionError::MissingCommandLineTool {
            base_uri: documents.base_uri.clone(),
        })?;

    let mut issues = Vec::new();
    if workflows.len() > 1 {
        issues.push(multiple_issue(
            "Workflow",
            workflows.iter().map(|record| record.id.as_str()),
            workflow.id.as_str(),
            "selection.multiple_workflows",
        ));
    }
    if tools.len() > 1 {
        issues.push(multiple_issue(
            "CommandLineTool",
            tools.iter().map(|record| record.id.as_str()),
            tool.id.as_str(),
            "selection.multiple_tools",
        ));
    }

    Ok(Selection {
        records: SelectedRecords { workflow, tool },
        issues,
    })
}

fn multiple_issue<'a>(
    class: &str,
    ids: impl Iterator<Item = &'a str>,
    chosen: &str,
    reference: &str,
) -> StructuredIssue {
    let candidates = ids.collect::<Vec<_>>();
    StructuredIssue::new(
        "selection_warning",
        IssueSeverity::Warning,
        FieldPath::root(),
        format!(
            "{} {class} records found; converting the last one",
            candidates.len()
        ),
        reference,
    )
    .with_source_id(chosen)
    .with_related(json!({ "candidates": candidates }))
}

#[cfg(test)]
#[path = "select_test.rs"]
mod tests;
