use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Number(Number),
    String(String),
}

/// A parameter default as loaded from the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    Null,
    Scalar(ScalarValue),
    /// Mappings and sequences, for example a `File` object literal.
    Structured(Value),
}

pub trait DefaultValueVisitor {
    type Output;

    fn visit_null(&mut self) -> Self::Output;
    fn visit_scalar(&mut self, value: &ScalarValue) -> Self::Output;
    fn visit_structured(&mut self, value: &Value) -> Self::Output;
}

impl DefaultValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => DefaultValue::Null,
            Value::Bool(flag) => DefaultValue::Scalar(ScalarValue::Bool(flag)),
            Value::Number(number) => DefaultValue::Scalar(ScalarValue::Number(number)),
            Value::String(text) => DefaultValue::Scalar(ScalarValue::String(text)),
            structured @ (Value::Array(_) | Value::Object(_)) => DefaultValue::Structured(structured),
        }
    }

    pub fn accept<V: DefaultValueVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            DefaultValue::Null => visitor.visit_null(),
            DefaultValue::Scalar(value) => visitor.visit_scalar(value),
            DefaultValue::Structured(value) => visitor.visit_structured(value),
        }
    }

    /// Text form used for the `default` field of a submitter parameter.
    /// Null defaults produce no text.
    pub fn to_param_text(&self) -> Option<String> {
        self.accept(&mut ParamTextVisitor)
    }
}

/// Scalars print directly; structured values become compact JSON.
pub struct ParamTextVisitor;

impl DefaultValueVisitor for ParamTextVisitor {
    type Output = Option<String>;

    fn visit_null(&mut self) -> Self::Output {
        None
    }

    fn visit_scalar(&mut self, value: &ScalarValue) -> Self::Output {
        Some(match value {
            ScalarValue::Bool(flag) => flag.to_string(),
            ScalarValue::Number(number) => number.to_string(),
            ScalarValue::String(text) => text.clone(),
        })
    }

    fn visit_structured(&mut self, value: &Value) -> Self::Output {
        serde_json::to_string(value).ok()
    }
}

#[cfg(test)]
#[path = "default_value_test.rs"]
mod tests;
