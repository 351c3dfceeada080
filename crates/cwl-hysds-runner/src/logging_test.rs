use super::{init_logging, log_issues};
use cwl_hysds_core::{FieldPath, IssueSeverity, StructuredIssue};

#[test]
fn init_is_idempotent() {
    init_logging("warn").expect("level must parse");
    assert!(!init_logging("warn").expect("level must parse"));
}

#[test]
fn log_issues_accepts_every_severity() {
    let issues = [IssueSeverity::Error, IssueSeverity::Warning, IssueSeverity::Info]
        .into_iter()
        .map(|severity| {
            StructuredIssue::new(
                "conversion_warning",
                severity,
                FieldPath::root().key("inputs").index(0),
                "message",
                "params.duplicate_name",
            )
        })
        .collect::<Vec<_>>();
    log_issues(&issues);
}
