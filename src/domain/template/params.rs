// Expansion parameters: variable name -> scalar or list value
//
// Variables never set are simply absent; expansion elides them (query
// position) or rejects the expansion (simple position). There is no
// "null" value on the wire.

use std::collections::HashMap;

/// A single parameter value. Lists serialize as comma-joined entries
/// (RFC6570 non-explode list expansion) — this is what carries `embed`
/// collections and batch id lists.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Percent-encoded wire form. List items are encoded individually
    /// and joined with literal commas.
    pub(crate) fn encoded(&self) -> String {
        match self {
            ParamValue::Scalar(value) => urlencoding::encode(value).to_string(),
            ParamValue::List(items) => items
                .iter()
                .map(|item| urlencoding::encode(item).to_string())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        ParamValue::List(items)
    }
}

impl From<&[String]> for ParamValue {
    fn from(items: &[String]) -> Self {
        ParamValue::List(items.to_vec())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(items: Vec<&str>) -> Self {
        ParamValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// The parameter map a template is expanded against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionParams {
    values: HashMap<String, ParamValue>,
}

impl ExpansionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
