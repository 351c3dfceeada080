use serde::{Deserialize, Serialize};

pub const NULL_TYPE: &str = "null";

/// A CWL parameter type as written in the source document.
///
/// Optionality has two encodings that both land here: a scalar name with a
/// trailing `?` and a union with a literal `null` member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeExpression {
    Scalar(String),
    Union(Vec<TypeExpression>),
    ArraySchema(Box<TypeExpression>),
    /// `enum` or `record` schemas. The target schema has no counterpart.
    Complex(String),
}

impl TypeExpression {
    /// Builds an expression from a bare type name, expanding the `T[]`
    /// shorthand into an array schema. A trailing `?` is kept verbatim.
    pub fn from_type_name(name: &str) -> Self {
        if let Some(items) = name.strip_suffix("[]") {
            return TypeExpression::ArraySchema(Box::new(TypeExpression::from_type_name(items)));
        }
        TypeExpression::Scalar(name.to_string())
    }

    pub fn is_optional(&self) -> bool {
        match self {
            TypeExpression::Scalar(name) => name.ends_with('?'),
            TypeExpression::Union(members) => members.iter().any(TypeExpression::is_null),
            TypeExpression::ArraySchema(_) | TypeExpression::Complex(_) => false,
        }
    }

    /// Strips the optionality marker. Returns `None` when nothing but `null`
    /// remains. The result is never optional itself.
    pub fn base_type(&self) -> Option<TypeExpression> {
        match self {
            TypeExpression::Scalar(name) => {
                let stripped = name.trim_end_matches('?');
                if stripped.is_empty() {
                    return None;
                }
                Some(TypeExpression::from_type_name(stripped))
            }
            TypeExpression::Union(members) => {
                let mut remaining = members
                    .iter()
                    .filter_map(TypeExpression::base_type)
                    .filter(|member| !member.is_null())
                    .collect::<Vec<_>>();
                match remaining.len() {
                    0 => None,
                    1 => remaining.pop(),
                    _ => Some(TypeExpression::Union(remaining)),
                }
            }
            TypeExpression::ArraySchema(_) | TypeExpression::Complex(_) => Some(self.clone()),
        }
    }

    pub fn scalar_name(&self) -> Option<&str> {
        match self {
            TypeExpression::Scalar(name) => Some(name.as_str()),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        self.scalar_name() == Some(NULL_TYPE)
    }
}

#[cfg(test)]
#[path = "type_expression_test.rs"]
mod tests;
