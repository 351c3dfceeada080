use cwl_hysds_core::{FieldPath, IssueSeverity, StructuredIssue};
use serde_json::json;
use std::collections::HashMap;

/// Local name of a parameter or process: the last `/` segment of the URI
/// fragment. Without a fragment the result is empty.
pub fn local_name(uri: &str) -> &str {
    let Some((_, fragment)) = uri.split_once('#') else {
        return "";
    };
    fragment.rsplit('/').next().unwrap_or_default()
}

/// Location of the `index`th entry of `list_key` inside its record. Loaded
/// entries carry their own path, which stays correct when the loader skipped
/// siblings or the list was written as a mapping.
pub(crate) fn entry_path(
    source_path: Option<&FieldPath>,
    list_key: &str,
    index: usize,
) -> FieldPath {
    source_path
        .cloned()
        .unwrap_or_else(|| FieldPath::root().key(list_key).index(index))
}

/// Entries sharing a local name are all kept. Consumers keyed by name see
/// the last one.
pub(crate) fn duplicate_name_issues<'a>(
    entries: impl IntoIterator<Item = (&'a str, FieldPath)>,
    source_id: &str,
) -> Vec<StructuredIssue> {
    let mut first_seen = HashMap::<&str, usize>::new();
    let mut issues = Vec::new();
    for (index, (name, path)) in entries.into_iter().enumerate() {
        match first_seen.get(name).copied() {
            Some(first) => issues.push(
                StructuredIssue::new(
                    "conversion_warning",
                    IssueSeverity::Warning,
                    path,
                    format!("parameter name `{name}` repeats entry {first}; the later entry wins"),
                    "params.duplicate_name",
                )
                .with_source_id(source_id)
                .with_related(json!({ "name": name, "first_index": first })),
            ),
            None => {
                first_seen.insert(name, index);
            }
        }
    }
    issues
}

#[cfg(test)]
#[path = "identifier_test.rs"]
mod tests;
