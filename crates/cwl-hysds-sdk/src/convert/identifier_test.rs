use super::{duplicate_name_issues, entry_path, local_name};
use cwl_hysds_core::FieldPath;

fn indexed<'a>(names: &[&'a str]) -> Vec<(&'a str, FieldPath)> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| (*name, entry_path(None, "inputs", index)))
        .collect()
}

#[test]
fn last_fragment_segment_is_the_local_name() {
    assert_eq!(local_name("file:///work/flow.cwl#main/threshold"), "threshold");
    assert_eq!(local_name("file:///work/flow.cwl#threshold"), "threshold");
    assert_eq!(local_name("#main/nested/scene"), "scene");
}

#[test]
fn uri_without_fragment_has_empty_name() {
    assert_eq!(local_name("file:///work/flow.cwl"), "");
    assert_eq!(local_name(""), "");
}

#[test]
fn trailing_slash_yields_empty_name() {
    assert_eq!(local_name("file:///a.cwl#main/"), "");
    assert_eq!(local_name("file:///a.cwl#"), "");
}

#[test]
fn extraction_is_stable_under_reapplication() {
    let uri = "file:///work/flow.cwl#main/threshold";
    let first = local_name(uri);
    assert_eq!(local_name(uri), first);
    assert_eq!(local_name(&format!("file:///other.cwl#{first}")), first);
}

#[test]
fn repeated_names_warn_once_per_repeat() {
    let issues = duplicate_name_issues(indexed(&["size", "mode", "size", "size"]), "#main");
    let paths = issues
        .iter()
        .map(|issue| issue.field_path.to_string())
        .collect::<Vec<_>>();
    assert_eq!(paths, vec!["$.inputs[2]", "$.inputs[3]"]);
    assert!(issues
        .iter()
        .all(|issue| issue.has_reference("params.duplicate_name")));
    assert_eq!(
        issues[0]
            .related
            .as_ref()
            .and_then(|related| related.get("first_index"))
            .and_then(|index| index.as_u64()),
        Some(0)
    );
}

#[test]
fn distinct_names_raise_nothing() {
    assert!(duplicate_name_issues(indexed(&["a", "b", "c"]), "#main").is_empty());
}

#[test]
fn loaded_entries_report_their_own_location() {
    let mapped = FieldPath::root().key("inputs").key("size");
    assert_eq!(entry_path(Some(&mapped), "inputs", 4).to_string(), "$.inputs.size");
    assert_eq!(entry_path(None, "inputs", 4).to_string(), "$.inputs[4]");

    let issues = duplicate_name_issues(
        [
            ("size", FieldPath::root().key("inputs").index(0)),
            ("size", FieldPath::root().key("inputs").index(2)),
        ],
        "#main",
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field_path.to_string(), "$.inputs[2]");
}
