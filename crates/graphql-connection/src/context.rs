use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-owned key/value data that travels with a request.
///
/// The connection never reads, merges or rewrites it; it only passes it on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionContext(Map<String, Value>);

impl ExecutionContext {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Looks an entry up.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the caller supplied no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for ExecutionContext {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ExecutionContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn it_serializes_as_a_plain_object() {
        let context: ExecutionContext = [("user_id", 1)].into_iter().collect();
        assert_eq!(serde_json::to_value(&context).unwrap(), json!({ "user_id": 1 }));
        assert_eq!(context.get("user_id"), Some(&json!(1)));
    }

    #[test]
    fn it_keeps_insertion_order() {
        let mut context = ExecutionContext::new();
        assert!(context.is_empty());
        context.insert("b", "second");
        context.insert("a", "first");

        let keys: Vec<_> = context.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
