use super::{resolve_requirements, RequirementOptions};
use crate::documents::{ContainerRequirement, Requirement, ResourceRequirement, ResourceValue};
use cwl_hysds_core::IssueSeverity;
use serde_json::Number;

fn container(pull: &str, import: Option<&str>) -> Requirement {
    Requirement::Container(ContainerRequirement {
        pull: pull.to_string(),
        import: import.map(str::to_string),
        source_path: None,
    })
}

fn outdir(value: ResourceValue) -> Requirement {
    Requirement::Resource(ResourceRequirement {
        outdir_max: Some(value),
        ..ResourceRequirement::default()
    })
}

fn text(value: &str) -> ResourceValue {
    ResourceValue::Text(value.to_string())
}

#[test]
fn numeric_string_outdir_sets_disk_usage() {
    let resolved = resolve_requirements(&[outdir(text("20"))], &RequirementOptions::default());
    assert_eq!(resolved.disk_usage, "20GB");
    assert!(resolved.issues.is_empty(), "{:?}", resolved.issues);
}

#[test]
fn integer_and_integral_float_outdir_are_accepted() {
    let options = RequirementOptions::default();
    let resolved = resolve_requirements(&[outdir(ResourceValue::Number(Number::from(64)))], &options);
    assert_eq!(resolved.disk_usage, "64GB");

    let float = Number::from_f64(32.0).expect("finite float");
    let resolved = resolve_requirements(&[outdir(ResourceValue::Number(float))], &options);
    assert_eq!(resolved.disk_usage, "32GB");
}

#[test]
fn malformed_outdir_falls_back_with_warning() {
    let resolved = resolve_requirements(&[outdir(text("abc"))], &RequirementOptions::default());
    assert_eq!(resolved.disk_usage, "10GB");

    let warning = resolved
        .issues
        .iter()
        .find(|issue| issue.has_reference("requirements.resource.outdir_max_invalid"))
        .expect("malformed outdirMax warning");
    assert_eq!(warning.severity, IssueSeverity::Warning);
    assert_eq!(warning.field_path.to_string(), "$.requirements[0].outdirMax");
    assert!(warning.message.contains("abc"));

    let negative = resolve_requirements(
        &[outdir(ResourceValue::Number(Number::from(-1)))],
        &RequirementOptions::default(),
    );
    assert_eq!(negative.disk_usage, "10GB");
    assert!(negative
        .issues
        .iter()
        .any(|issue| issue.has_reference("requirements.resource.outdir_max_invalid")));
    let negative_text = resolve_requirements(&[outdir(text("-1"))], &RequirementOptions::default());
    assert_eq!(negative_text.disk_usage, "10GB");
}

#[test]
fn missing_resource_requirement_defaults_with_info_note() {
    let resolved = resolve_requirements(&[container("ubuntu", None)], &RequirementOptions::default());
    assert_eq!(resolved.disk_usage, "10GB");
    assert_eq!(resolved.issues.len(), 1);
    assert_eq!(resolved.issues[0].severity, IssueSeverity::Info);
    assert!(resolved.issues[0].has_reference("requirements.resource.disk_default"));
}

#[test]
fn configured_default_disk_is_used() {
    let options = RequirementOptions {
        default_disk_gb: 50,
        ..RequirementOptions::default()
    };
    assert_eq!(resolve_requirements(&[], &options).disk_usage, "50GB");
    assert_eq!(
        resolve_requirements(&[outdir(text("-5"))], &options).disk_usage,
        "50GB"
    );
}

#[test]
fn last_usable_outdir_wins() {
    let requirements = vec![
        outdir(text("20")),
        outdir(text("40")),
        outdir(text("$(inputs.size)")),
    ];
    let resolved = resolve_requirements(&requirements, &RequirementOptions::default());
    assert_eq!(resolved.disk_usage, "40GB");
    assert_eq!(resolved.issues.len(), 1);
    assert!(resolved.issues[0].has_reference("requirements.resource.outdir_max_invalid"));
}

#[test]
fn every_container_is_kept_in_order() {
    let options = RequirementOptions {
        fallback_container_uri: "s3://bucket/image.tar".to_string(),
        ..RequirementOptions::default()
    };
    let requirements = vec![
        container("docker.io/library/ubuntu:22.04", None),
        outdir(text("15")),
        container("ghcr.io/org/tool:1.0", Some("https://example.org/tool.tar")),
    ];
    let resolved = resolve_requirements(&requirements, &options);

    let names = resolved
        .dependency_images
        .iter()
        .map(|image| image.container_image_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["library/ubuntu:22.04", "org/tool:1.0"]);
    assert_eq!(
        resolved.dependency_images[0].container_image_url.as_deref(),
        Some("s3://bucket/image.tar")
    );
    assert_eq!(
        resolved.dependency_images[1].container_image_url.as_deref(),
        Some("https://example.org/tool.tar")
    );
    assert!(resolved
        .dependency_images
        .iter()
        .all(|image| image.container_mappings.is_empty()));
    assert_eq!(resolved.disk_usage, "15GB");
}

#[test]
fn ram_and_cores_only_produce_notes() {
    let requirements = vec![Requirement::Resource(ResourceRequirement {
        outdir_max: Some(text("25")),
        ram_min: Some(ResourceValue::Number(Number::from(4096))),
        source_path: None,
        cores_min: Some(ResourceValue::Number(Number::from(2))),
    })];
    let resolved = resolve_requirements(&requirements, &RequirementOptions::default());
    assert_eq!(resolved.disk_usage, "25GB");

    let paths = resolved
        .issues
        .iter()
        .filter(|issue| issue.has_reference("requirements.resource.unmapped"))
        .map(|issue| issue.field_path.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        paths,
        vec!["$.requirements[0].coresMin", "$.requirements[0].ramMin"]
    );
    assert!(resolved
        .issues
        .iter()
        .all(|issue| issue.severity == IssueSeverity::Info));
}
