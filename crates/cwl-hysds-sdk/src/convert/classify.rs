use crate::documents::TypeExpression;
use crate::specs::Destination;

pub const OBJECT_TYPE_TAG: &str = "object";

/// CWL scalar type -> submitter parameter type tag.
pub const IO_TYPE_TAGS: &[(&str, &str)] = &[
    ("string", "text"),
    ("int", "number"),
    ("long", "number"),
    ("float", "number"),
    ("double", "number"),
    ("boolean", "boolean"),
    ("File", "text"),
    ("Directory", "text"),
];

/// CWL scalar types the platform stages onto the worker before the run.
pub const LOCALIZE_TYPES: &[&str] = &["File", "Directory"];

/// Target type tag for a parameter type, or `None` when the table has no
/// entry (the output field is then omitted).
pub fn io_type_tag(expression: &TypeExpression) -> Option<&'static str> {
    match expression.base_type()? {
        TypeExpression::Scalar(name) => lookup_tag(name.as_str()),
        TypeExpression::ArraySchema(_) => Some(OBJECT_TYPE_TAG),
        TypeExpression::Union(members) => members
            .iter()
            .filter_map(TypeExpression::scalar_name)
            .find_map(lookup_tag),
        TypeExpression::Complex(_) => None,
    }
}

/// Destination for a command input judged by its type alone.
pub fn type_destination(expression: &TypeExpression) -> Destination {
    match expression.base_type() {
        Some(TypeExpression::Scalar(name)) if is_localized(name.as_str()) => Destination::Localize,
        Some(TypeExpression::Union(members))
            if members
                .iter()
                .filter_map(TypeExpression::scalar_name)
                .any(is_localized) =>
        {
            Destination::Localize
        }
        _ => Destination::Context,
    }
}

fn lookup_tag(name: &str) -> Option<&'static str> {
    IO_TYPE_TAGS
        .iter()
        .find(|(source, _)| *source == name)
        .map(|(_, tag)| *tag)
}

fn is_localized(name: &str) -> bool {
    LOCALIZE_TYPES.contains(&name)
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
