use indexmap::IndexMap;

use crate::error::{ParseError, Result};

/// Field name to rendered scalar text, first-seen order.
pub(crate) type Fields = IndexMap<String, String>;

/// Dialect-neutral parse result, decided once when a probe succeeds.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Document {
    Mapping(Fields),
    Sequence(Vec<Element>),
    Absent,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Element {
    Mapping(Fields),
    Scalar(String),
}

impl Document {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(Document::Absent),
            serde_json::Value::Object(fields) => {
                let mut out = Fields::with_capacity(fields.len());
                for (key, value) in fields {
                    let rendered = json_scalar(&value)
                        .ok_or_else(|| ParseError::NestedValue(key.clone()))?;
                    out.insert(key, rendered);
                }
                Ok(Document::Mapping(out))
            }
            serde_json::Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(json_element(item)?);
                }
                Ok(Document::Sequence(out))
            }
            _ => Err(ParseError::ScalarRoot),
        }
    }

    pub fn from_yaml(value: serde_yaml::Value) -> Result<Self> {
        match value {
            serde_yaml::Value::Null => Ok(Document::Absent),
            serde_yaml::Value::Mapping(fields) => Ok(Document::Mapping(yaml_fields(fields)?)),
            serde_yaml::Value::Sequence(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(yaml_element(item)?);
                }
                Ok(Document::Sequence(out))
            }
            _ => Err(ParseError::ScalarRoot),
        }
    }
}

fn json_element(value: serde_json::Value) -> Result<Element> {
    match value {
        serde_json::Value::Object(fields) => {
            let mut out = Fields::with_capacity(fields.len());
            for (key, value) in fields {
                let rendered =
                    json_scalar(&value).ok_or_else(|| ParseError::NestedValue(key.clone()))?;
                out.insert(key, rendered);
            }
            Ok(Element::Mapping(out))
        }
        serde_json::Value::Array(_) => Err(ParseError::NestedSequence),
        other => match json_scalar(&other) {
            Some(text) => Ok(Element::Scalar(text)),
            None => Err(ParseError::NestedSequence),
        },
    }
}

fn yaml_element(value: serde_yaml::Value) -> Result<Element> {
    match value {
        serde_yaml::Value::Mapping(fields) => Ok(Element::Mapping(yaml_fields(fields)?)),
        serde_yaml::Value::Sequence(_) => Err(ParseError::NestedSequence),
        other => match yaml_scalar(&other) {
            Some(text) => Ok(Element::Scalar(text)),
            None => Err(ParseError::NestedSequence),
        },
    }
}

fn yaml_fields(fields: serde_yaml::Mapping) -> Result<Fields> {
    let mut out = Fields::with_capacity(fields.len());
    for (key, value) in fields {
        let key = yaml_scalar(&key).ok_or(ParseError::NonScalarKey)?;
        let rendered =
            yaml_scalar(&value).ok_or_else(|| ParseError::NestedValue(key.clone()))?;
        out.insert(key, rendered);
    }
    Ok(out)
}

/// Renders a leaf value to its text form; `None` for containers.
///
/// Null renders as the empty string so downstream emptiness checks treat
/// it the same as a missing value.
fn json_scalar(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => Some(String::new()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Null => Some(String::new()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Mapping(_)
        | serde_yaml::Value::Tagged(_) => None,
    }
}
