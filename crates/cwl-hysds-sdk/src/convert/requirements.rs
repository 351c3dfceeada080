use super::container::{resolve_image_url, strip_registry};
use super::identifier::entry_path;
use crate::documents::{Requirement, ResourceRequirement};
use crate::specs::DependencyImage;
use cwl_hysds_core::{FieldPath, IssueSeverity, StructuredIssue};
use serde_json::{json, Map};

pub const DEFAULT_DISK_GB: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementOptions {
    /// Image URL used when a container requirement has no import reference.
    pub fallback_container_uri: String,
    pub default_disk_gb: u64,
}

impl Default for RequirementOptions {
    fn default() -> Self {
        Self {
            fallback_container_uri: String::new(),
            default_disk_gb: DEFAULT_DISK_GB,
        }
    }
}

/// Container and disk facts extracted from a step's requirement list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequirements {
    pub dependency_images: Vec<DependencyImage>,
    pub disk_usage: String,
    pub issues: Vec<StructuredIssue>,
}

/// Walks the requirements once, in order. Every container requirement becomes
/// an image entry; the last resource requirement with a usable `outdirMax`
/// sets the disk size.
pub fn resolve_requirements(
    requirements: &[Requirement],
    options: &RequirementOptions,
) -> ResolvedRequirements {
    let base_path = FieldPath::root().key("requirements");
    let mut dependency_images = Vec::new();
    let mut disk_gb = None;
    let mut issues = Vec::new();

    for (index, requirement) in requirements.iter().enumerate() {
        let path = entry_path(requirement.source_path(), "requirements", index);
        match requirement {
            Requirement::Container(container) => dependency_images.push(DependencyImage {
                container_image_name: strip_registry(container.pull.as_str()),
                container_image_url: resolve_image_url(
                    container,
                    options.fallback_container_uri.as_str(),
                ),
                container_mappings: Map::new(),
            }),
            Requirement::Resource(resource) => {
                if let Some(size) = resource_disk_gb(resource, &path, options, &mut issues) {
                    disk_gb = Some(size);
                }
                note_unmapped_resources(resource, &path, &mut issues);
            }
        }
    }

    let disk_gb = disk_gb.unwrap_or_else(|| {
        issues.push(
            StructuredIssue::new(
                "requirement_note",
                IssueSeverity::Info,
                base_path.clone(),
                format!(
                    "no usable outdirMax declared; disk_usage defaults to {}GB",
                    options.default_disk_gb
                ),
                "requirements.resource.disk_default",
            ),
        );
        options.default_disk_gb
    });

    StructuredIssue::sort_stable(&mut issues);
    ResolvedRequirements {
        dependency_images,
        disk_usage: format_disk_usage(disk_gb),
        issues,
    }
}

pub fn format_disk_usage(gigabytes: u64) -> String {
    format!("{gigabytes}GB")
}

fn resource_disk_gb(
    resource: &ResourceRequirement,
    path: &FieldPath,
    options: &RequirementOptions,
    issues: &mut Vec<StructuredIssue>,
) -> Option<u64> {
    let outdir_max = resource.outdir_max.as_ref()?;
    match outdir_max.as_whole_number() {
        Some(size) => Some(size),
        None => {
            issues.push(
                StructuredIssue::new(
                    "requirement_warning",
                    IssueSeverity::Warning,
                    path.key("outdirMax"),
                    format!(
                        "outdirMax `{outdir_max}` is not an integer; using {}GB",
                        options.default_disk_gb
                    ),
                    "requirements.resource.outdir_max_invalid",
                )
                .with_related(json!({ "value": outdir_max.to_string() })),
            );
            None
        }
    }
}

/// The job spec has no fields for memory or cores.
fn note_unmapped_resources(
    resource: &ResourceRequirement,
    path: &FieldPath,
    issues: &mut Vec<StructuredIssue>,
) {
    let unmapped = [("ramMin", &resource.ram_min), ("coresMin", &resource.cores_min)];
    for (field, value) in unmapped {
        if let Some(value) = value {
            issues.push(StructuredIssue::new(
                "requirement_note",
                IssueSeverity::Info,
                path.key(field),
                format!("{field} `{value}` has no job spec field and is not emitted"),
                "requirements.resource.unmapped",
            ));
        }
    }
}

#[cfg(test)]
#[path = "requirements_test.rs"]
mod tests;
