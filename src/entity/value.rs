//! Component values and the shared type check.

use std::fmt;

use serde_json::Value;

use crate::error::{Error, Result};

/// Value of a single filename or folder component.
///
/// Only the run slot accepts an [`ComponentValue::Index`]; it is rendered
/// zero-padded to two digits. Every other slot must hold text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentValue {
    Text(String),
    Index(i64),
}

impl ComponentValue {
    /// Name of the value's type, used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            ComponentValue::Text(_) => "string",
            ComponentValue::Index(_) => "integer",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ComponentValue::Text(text) => Some(text),
            ComponentValue::Index(_) => None,
        }
    }

    /// Turn an index into its zero-padded text form. Text is returned unchanged.
    pub fn into_text(self) -> ComponentValue {
        match self {
            ComponentValue::Index(index) => ComponentValue::Text(format!("{:02}", index)),
            text => text,
        }
    }

    /// Convert a JSON value for the given slot. `null` is absent.
    pub(crate) fn from_json(field: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(ComponentValue::Text(text.clone()))),
            Value::Number(number) => number
                .as_i64()
                .map(|index| Some(ComponentValue::Index(index)))
                .ok_or_else(|| Error::invalid_type(field, json_type_name(value))),
            other => Err(Error::invalid_type(field, json_type_name(other))),
        }
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentValue::Text(text) => write!(f, "{}", text),
            ComponentValue::Index(index) => write!(f, "{:02}", index),
        }
    }
}

impl From<&str> for ComponentValue {
    fn from(text: &str) -> Self {
        ComponentValue::Text(text.to_string())
    }
}

impl From<String> for ComponentValue {
    fn from(text: String) -> Self {
        ComponentValue::Text(text)
    }
}

impl From<&String> for ComponentValue {
    fn from(text: &String) -> Self {
        ComponentValue::Text(text.clone())
    }
}

impl From<i32> for ComponentValue {
    fn from(index: i32) -> Self {
        ComponentValue::Index(i64::from(index))
    }
}

impl From<i64> for ComponentValue {
    fn from(index: i64) -> Self {
        ComponentValue::Index(index)
    }
}

impl From<u32> for ComponentValue {
    fn from(index: u32) -> Self {
        ComponentValue::Index(i64::from(index))
    }
}

/// Make sure all present values are text.
///
/// Integer run indices must already be converted with
/// [`ComponentValue::into_text`] before calling this.
pub(crate) fn check_types<'a, I>(values: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, Option<&'a ComponentValue>)>,
{
    for (field, value) in values {
        if let Some(value) = value {
            if value.as_text().is_none() {
                return Err(Error::invalid_type(field, value.type_name()));
            }
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
