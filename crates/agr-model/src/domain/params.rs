use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::KeyValue;

/// Request parameter map sent with every call.
///
/// Owns its values: cloning a `Params` yields a fully independent container,
/// so per-chunk copies can be modified without touching the template they came from.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Params(pub BTreeMap<String, Value>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a parameter.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Get a parameter value, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove a parameter, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Iterate over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Write every pair into the map; later pairs win over earlier ones and over existing keys.
    pub fn extend_pairs<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = &'a KeyValue>,
    {
        for kv in pairs {
            self.0.insert(kv.key().to_string(), kv.value().clone());
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Params;
    use crate::KeyValue;
    use serde_json::json;

    #[test]
    fn insert_overwrites_existing_key() {
        let mut p = Params::new();
        p.insert("role", "group_member").insert("role", "group_admin");

        assert_eq!(p.len(), 1);
        assert_eq!(p.get("role"), Some(&json!("group_admin")));
    }

    #[test]
    fn extend_pairs_last_wins() {
        let mut p: Params = [("a", json!(1))].into_iter().collect();
        let pairs = [KeyValue::new("a", 2), KeyValue::new("b", "x"), KeyValue::new("a", 3)];
        p.extend_pairs(&pairs);

        assert_eq!(p.get("a"), Some(&json!(3)));
        assert_eq!(p.get("b"), Some(&json!("x")));
    }

    #[test]
    fn clone_is_independent() {
        let mut base = Params::new();
        base.insert("list", json!(["a"]));

        let mut copy = base.clone();
        copy.insert("list", json!(["b", "c"]));
        copy.insert("extra", 1);

        assert_eq!(base.get("list"), Some(&json!(["a"])));
        assert!(base.get("extra").is_none());
    }

    #[test]
    fn serde_transparent_is_plain_object() {
        let mut p = Params::new();
        p.insert("foo", true);

        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"foo":true}"#);

        let back: Params = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
