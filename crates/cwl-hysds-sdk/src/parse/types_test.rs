use super::convert_type;
use crate::documents::TypeExpression;
use cwl_hysds_core::FieldPath;
use serde_json::json;

fn scalar(name: &str) -> TypeExpression {
    TypeExpression::Scalar(name.to_string())
}

#[test]
fn strings_keep_optional_suffix() {
    let mut issues = Vec::new();
    let converted = convert_type(&json!("float?"), &FieldPath::root(), &mut issues);
    assert_eq!(converted, Some(scalar("float?")));
    assert!(issues.is_empty());
}

#[test]
fn lists_become_unions() {
    let mut issues = Vec::new();
    let converted = convert_type(&json!(["null", "File"]), &FieldPath::root(), &mut issues);
    assert_eq!(
        converted,
        Some(TypeExpression::Union(vec![scalar("null"), scalar("File")]))
    );
}

#[test]
fn array_schema_mapping_and_shorthand_agree() {
    let mut issues = Vec::new();
    let from_mapping = convert_type(
        &json!({"type": "array", "items": "string"}),
        &FieldPath::root(),
        &mut issues,
    );
    let from_shorthand = convert_type(&json!("string[]"), &FieldPath::root(), &mut issues);
    assert_eq!(from_mapping, from_shorthand);
    assert_eq!(
        from_mapping,
        Some(TypeExpression::ArraySchema(Box::new(scalar("string"))))
    );
}

#[test]
fn enum_and_record_schemas_are_complex() {
    let mut issues = Vec::new();
    let converted = convert_type(
        &json!({"type": "enum", "symbols": ["a", "b"]}),
        &FieldPath::root(),
        &mut issues,
    );
    assert_eq!(converted, Some(TypeExpression::Complex("enum".to_string())));
}

#[test]
fn array_schema_without_items_is_reported() {
    let mut issues = Vec::new();
    let path = FieldPath::root().key("inputs").index(0).key("type");
    let converted = convert_type(&json!({"type": "array"}), &path, &mut issues);
    assert_eq!(converted, None);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].has_reference("cwl.type.array_items_required"));
    assert_eq!(issues[0].field_path.to_string(), "$.inputs[0].type.items");
}

#[test]
fn numbers_are_not_types() {
    let mut issues = Vec::new();
    assert_eq!(convert_type(&json!(7), &FieldPath::root(), &mut issues), None);
    assert!(issues[0].has_reference("cwl.type.unsupported"));
}
