//! `where` filters in the CMS query format.
//!
//! A filter is serialized to JSON and sent as the `where` query parameter,
//! e.g. `{"slug":{"equals":"home"}}`.

use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Where {
    /// Matches every document; serializes to `{}`.
    #[default]
    All,
    Equals(String, Value),
}

impl Where {
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Where::Equals(field.into(), value.into())
    }

    pub fn to_value(&self) -> Value {
        match self {
            Where::All => Value::Object(Map::new()),
            Where::Equals(field, value) => json!({ field: { "equals": value } }),
        }
    }

    /// The filter as the `where` query parameter value.
    pub fn to_query(&self) -> String {
        self.to_value().to_string()
    }
}
