mod ids;
mod json;
mod process;
mod types;
mod yaml;

use crate::documents::DocumentSet;
use cwl_hysds_core::{FieldPath, IssueSeverity, StructuredIssue};

pub use ids::document_base;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Auto,
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDocumentOptions {
    pub format: DocumentFormat,
    /// URI the document was read from; ids are resolved against it.
    pub base_uri: String,
}

impl LoadDocumentOptions {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            format: DocumentFormat::Auto,
            base_uri: base_uri.into(),
        }
    }
}

/// A successfully loaded document together with its non-fatal issues.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocumentSet {
    pub documents: DocumentSet,
    pub issues: Vec<StructuredIssue>,
}

pub fn load_document_set(
    input: &str,
    base_uri: &str,
) -> Result<LoadedDocumentSet, Vec<StructuredIssue>> {
    load_document_set_with_options(input, &LoadDocumentOptions::new(base_uri))
}

pub fn load_document_set_with_options(
    input: &str,
    options: &LoadDocumentOptions,
) -> Result<LoadedDocumentSet, Vec<StructuredIssue>> {
    let value = match options.format {
        DocumentFormat::Auto => {
            if looks_like_json(input) {
                json::parse_json(input)
            } else {
                yaml::parse_yaml(input)
            }
        }
        DocumentFormat::Json => json::parse_json(input),
        DocumentFormat::Yaml => yaml::parse_yaml(input),
    }?;

    let base = document_base(options.base_uri.as_str());
    let mut issues = Vec::new();
    let records = process::collect_records(&value, base, &mut issues);
    StructuredIssue::sort_stable(&mut issues);

    if issues.iter().any(StructuredIssue::is_error) {
        return Err(issues);
    }
    Ok(LoadedDocumentSet {
        documents: DocumentSet {
            base_uri: base.to_string(),
            records,
        },
        issues,
    })
}

fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

pub(crate) fn issue(
    field_path: FieldPath,
    message: impl Into<String>,
    reference: &str,
) -> StructuredIssue {
    StructuredIssue::new("parse_error", IssueSeverity::Error, field_path, message, reference)
}

pub(crate) fn warning(
    field_path: FieldPath,
    message: impl Into<String>,
    reference: &str,
) -> StructuredIssue {
    StructuredIssue::new("parse_warning", IssueSeverity::Warning, field_path, message, reference)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
