use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Single request parameter written into [`crate::Params`].
///
/// The value is an arbitrary JSON value; encoding it for the wire is left to the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    /// Parameter name.
    key: String,
    /// Parameter value.
    value: Value,
}

impl KeyValue {
    /// Create a new parameter pair.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Split into owned key and value.
    pub fn into_parts(self) -> (String, Value) {
        (self.key, self.value)
    }
}

impl<V: Into<Value>> From<(&str, V)> for KeyValue {
    fn from((key, value): (&str, V)) -> Self {
        Self::new(key, value)
    }
}
