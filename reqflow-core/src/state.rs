use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Mutable key-value store threaded through all stages of one pipeline run.
///
/// Created when a run starts, written by each stage in sequence, and handed
/// back to the caller when the run ends. One run owns its instance
/// exclusively; concurrent runs must use independent instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedState {
    values: HashMap<String, Value>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding, for constructing the initial state of a run.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Stringified view of a value, as interpolated into prompts.
    ///
    /// JSON strings render without surrounding quotes; any other value
    /// renders in its canonical JSON form.
    pub fn text(&self, key: &str) -> Option<String> {
        self.values.get(key).map(stringify)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.values
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let mut state = SharedState::new();
        state.set("USER_REQUEST", "build a task manager");
        assert_eq!(state.get("USER_REQUEST"), Some(&json!("build a task manager")));
        assert!(state.get("MISSING").is_none());
    }

    #[test]
    fn test_overwrite_on_rerun() {
        let mut state = SharedState::new();
        state.set("ANALYSIS", "first");
        state.set("ANALYSIS", "second");
        assert_eq!(state.text("ANALYSIS").as_deref(), Some("second"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_text_strips_string_quotes() {
        let state = SharedState::new()
            .with("name", "alice")
            .with("score", 100)
            .with("tags", json!(["a", "b"]));
        assert_eq!(state.text("name").as_deref(), Some("alice"));
        assert_eq!(state.text("score").as_deref(), Some("100"));
        assert_eq!(state.text("tags").as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn test_equality_for_determinism_checks() {
        let a = SharedState::new().with("k", "v");
        let b = SharedState::new().with("k", "v");
        assert_eq!(a, b);
    }
}
