//! Persisted expand state

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Storage key holding the serialized state map
pub const STATE_KEY: &str = "showMoreStates";

/// Minimal string key-value store, shaped like `window.localStorage`
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that accepts a limited number of writes, then fails like a full `localStorage`
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct QuotaStore {
    pub inner: MemoryStore,
    pub writes_left: usize,
}

#[cfg(test)]
impl QuotaStore {
    pub fn new(writes_left: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            writes_left,
        }
    }
}

#[cfg(test)]
impl KeyValueStore for QuotaStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.writes_left == 0 {
            return Err(Error::Storage("quota exceeded".to_string()));
        }
        self.writes_left -= 1;
        self.inner.set(key, value)
    }
}

/// Header text -> expanded flag.
///
/// Entries are kept as raw JSON values so that anything another page wrote
/// under the same key survives a save. A value counts as expanded when it is
/// truthy in the JavaScript sense.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandStates(Map<String, Value>);

impl ExpandStates {
    /// Read the map from the store. Missing or unparseable data yields an empty map.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let Some(raw) = store.get(STATE_KEY) else {
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(states) => states,
            Err(err) => {
                log::warn!("ignoring malformed {}: {}", STATE_KEY, err);
                Self::default()
            }
        }
    }

    /// Write the whole map back to the store
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        let raw = serde_json::to_string(self)
            .map_err(|err| Error::Storage(err.to_string()))?;
        store.set(STATE_KEY, &raw)
    }

    pub fn is_expanded(&self, header_text: &str) -> bool {
        self.0.get(header_text).is_some_and(is_truthy)
    }

    pub fn set(&mut self, header_text: &str, expanded: bool) {
        self.0.insert(header_text.to_string(), Value::Bool(expanded));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Load, update one entry, save
pub fn persist<S: KeyValueStore + ?Sized>(
    store: &mut S,
    header_text: &str,
    expanded: bool,
) -> Result<()> {
    let mut states = ExpandStates::load(&*store);
    states.set(header_text, expanded);
    states.save(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing() {
        let store = MemoryStore::new();
        assert!(ExpandStates::load(&store).is_empty());
    }

    #[test]
    fn test_load_malformed() {
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, "{not json").unwrap();
        assert!(ExpandStates::load(&store).is_empty());

        store.set(STATE_KEY, "[1, 2, 3]").unwrap();
        assert!(ExpandStates::load(&store).is_empty());
    }

    #[test]
    fn test_persist_keeps_other_entries() {
        let mut store = MemoryStore::new();
        persist(&mut store, "Skills", true).unwrap();
        persist(&mut store, "Projects", false).unwrap();

        let states = ExpandStates::load(&store);
        assert_eq!(states.len(), 2);
        assert!(states.is_expanded("Skills"));
        assert!(!states.is_expanded("Projects"));
        assert!(!states.is_expanded("Unknown"));
    }

    #[test]
    fn test_non_bool_entries() {
        let mut store = MemoryStore::new();
        store
            .set(STATE_KEY, r#"{"Skills":true,"Legacy":1,"Old":"","Gone":null,"Zero":0}"#)
            .unwrap();

        let states = ExpandStates::load(&store);
        assert_eq!(states.len(), 5);
        assert!(states.is_expanded("Skills"));
        assert!(states.is_expanded("Legacy"));
        assert!(!states.is_expanded("Old"));
        assert!(!states.is_expanded("Gone"));
        assert!(!states.is_expanded("Zero"));
    }

    #[test]
    fn test_persist_keeps_foreign_values() {
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, r#"{"Skills":true,"Legacy":1}"#).unwrap();

        persist(&mut store, "Projects", true).unwrap();
        assert_eq!(
            store.get(STATE_KEY).unwrap(),
            r#"{"Legacy":1,"Projects":true,"Skills":true}"#
        );
    }

    #[test]
    fn test_wire_format() {
        let mut store = MemoryStore::new();
        persist(&mut store, "Skills", true).unwrap();
        assert_eq!(store.get(STATE_KEY).unwrap(), r#"{"Skills":true}"#);
    }
}
