use cwl_hysds_core::{FieldPath, IssueSeverity, StructuredIssue};
use serde_json::Value;

pub fn parse_json(input: &str) -> Result<Value, Vec<StructuredIssue>> {
    serde_json::from_str::<Value>(input).map_err(|err| {
        vec![StructuredIssue::new(
            "parse_error",
            IssueSeverity::Error,
            FieldPath::root(),
            format!("json parse failed: {err}"),
            "json.parse_error",
        )]
    })
}
