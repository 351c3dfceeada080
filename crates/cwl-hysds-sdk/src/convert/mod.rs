//! CWL records to HySDS specifications.
//!
//! Builders never fail: unmapped types and malformed resource values are
//! absorbed with a default and reported as issues. Only record selection can
//! abort a conversion.

mod classify;
mod container;
mod identifier;
mod io_spec;
mod job_spec;
mod requirements;
mod select;

pub use classify::{io_type_tag, type_destination, IO_TYPE_TAGS, LOCALIZE_TYPES, OBJECT_TYPE_TAG};
pub use container::{resolve_image_url, strip_registry};
pub use identifier::local_name;
pub use io_spec::{build_io_spec, BuildIoSpecResult};
pub use job_spec::{build_job_spec, param_destination, BuildJobSpecResult, JobSpecOptions};
pub use requirements::{
    format_disk_usage, resolve_requirements, RequirementOptions, ResolvedRequirements,
    DEFAULT_DISK_GB,
};
pub use select::{select_records, SelectedRecords, Selection, SelectionError};

use crate::documents::DocumentSet;
use crate::specs::{IoSpecDocument, IoSpecTemplate, JobSpecDocument, JobSpecTemplate};
use cwl_hysds_core::StructuredIssue;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvertOptions {
    pub io_template: IoSpecTemplate,
    pub job_template: JobSpecTemplate,
    pub job: JobSpecOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    pub io_spec: IoSpecDocument,
    pub job_spec: JobSpecDocument,
    /// Full id of the converted workflow.
    pub workflow_id: String,
    pub issues: Vec<StructuredIssue>,
}

impl ConversionOutput {
    pub fn workflow_name(&self) -> &str {
        local_name(self.workflow_id.as_str())
    }
}

/// Selects the workflow and tool, then builds both specifications. Nothing is
/// built unless both records are present.
pub fn convert(
    documents: &DocumentSet,
    options: &ConvertOptions,
) -> Result<ConversionOutput, SelectionError> {
    let Selection { records, mut issues } = select_records(documents)?;

    let io_spec = build_io_spec(records.workflow, &options.io_template);
    let job_spec = build_job_spec(records.tool, &options.job_template, &options.job);

    issues.extend(io_spec.issues);
    issues.extend(job_spec.issues);
    StructuredIssue::sort_stable(&mut issues);

    Ok(ConversionOutput {
        io_spec: io_spec.document,
        job_spec: job_spec.document,
        workflow_id: records.workflow.id.clone(),
        issues,
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
