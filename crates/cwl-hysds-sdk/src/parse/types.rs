use super::issue;
use crate::documents::TypeExpression;
use cwl_hysds_core::{FieldPath, StructuredIssue};
use serde_json::Value;

/// Reads a CWL type field. Problems are reported and yield `None`.
pub fn convert_type(
    value: &Value,
    path: &FieldPath,
    issues: &mut Vec<StructuredIssue>,
) -> Option<TypeExpression> {
    match value {
        Value::String(name) => Some(TypeExpression::from_type_name(name)),
        Value::Array(members) => {
            let converted = members
                .iter()
                .enumerate()
                .filter_map(|(index, member)| convert_type(member, &path.index(index), issues))
                .flat_map(|member| match member {
                    TypeExpression::Union(nested) => nested,
                    other => vec![other],
                })
                .collect::<Vec<_>>();
            Some(TypeExpression::Union(converted))
        }
        Value::Object(schema) => match schema.get("type") {
            Some(Value::String(kind)) if kind == "array" => {
                let items = match schema.get("items") {
                    Some(items) => convert_type(items, &path.key("items"), issues)?,
                    None => {
                        issues.push(issue(
                            path.key("items"),
                            "array schema must declare `items`",
                            "cwl.type.array_items_required",
                        ));
                        return None;
                    }
                };
                Some(TypeExpression::ArraySchema(Box::new(items)))
            }
            Some(Value::String(kind)) if kind == "enum" || kind == "record" => {
                Some(TypeExpression::Complex(kind.clone()))
            }
            Some(nested) => convert_type(nested, &path.key("type"), issues),
            None => {
                issues.push(issue(
                    path.key("type"),
                    "type schema must declare `type`",
                    "cwl.type.schema_type_required",
                ));
                None
            }
        },
        _ => {
            issues.push(issue(
                path.clone(),
                format!("unsupported type expression: {value}"),
                "cwl.type.unsupported",
            ));
            None
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
