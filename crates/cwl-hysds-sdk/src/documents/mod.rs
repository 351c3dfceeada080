mod command_line_tool;
mod default_value;
mod requirement;
mod type_expression;
mod workflow;

pub use command_line_tool::{CommandInputParameter, CommandStepRecord, InputBinding};
pub use default_value::{DefaultValue, DefaultValueVisitor, ParamTextVisitor, ScalarValue};
pub use requirement::{
    ContainerRequirement, Requirement, ResourceRequirement, ResourceValue,
    DOCKER_REQUIREMENT_CLASS, RESOURCE_REQUIREMENT_CLASS,
};
pub use type_expression::{TypeExpression, NULL_TYPE};
pub use workflow::{WorkflowInputParameter, WorkflowRecord};

use serde::{Deserialize, Serialize};

pub const WORKFLOW_CLASS: &str = "Workflow";
pub const COMMAND_LINE_TOOL_CLASS: &str = "CommandLineTool";

/// A top-level process object recognised by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ProcessRecord {
    Workflow(WorkflowRecord),
    CommandLineTool(CommandStepRecord),
}

impl ProcessRecord {
    pub fn id(&self) -> &str {
        match self {
            ProcessRecord::Workflow(workflow) => workflow.id.as_str(),
            ProcessRecord::CommandLineTool(tool) => tool.id.as_str(),
        }
    }
}

/// Every process record found in one source document, in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSet {
    pub base_uri: String,
    pub records: Vec<ProcessRecord>,
}

impl DocumentSet {
    pub fn workflows(&self) -> impl Iterator<Item = &WorkflowRecord> {
        self.records.iter().filter_map(|record| match record {
            ProcessRecord::Workflow(workflow) => Some(workflow),
            ProcessRecord::CommandLineTool(_) => None,
        })
    }

    pub fn command_line_tools(&self) -> impl Iterator<Item = &CommandStepRecord> {
        self.records.iter().filter_map(|record| match record {
            ProcessRecord::CommandLineTool(tool) => Some(tool),
            ProcessRecord::Workflow(_) => None,
        })
    }
}
