//! An attribute map that notifies registered callbacks when a key's value
//! actually changes.
//!
//! Callbacks are `Arc<dyn Fn(...) + Send + Sync + 'static>` closures invoked
//! with a `(owner, key, new_value, old_value)` signature whenever a write
//! actually changes the stored value.

use std::collections::HashMap;
use std::sync::Arc;

use crate::value::{AttributeMap, Value};

/// `cb(owner_id, key, new_value, old_value)`.
pub type AttrCallback = Arc<dyn Fn(&str, &str, &Value, &Value) + Send + Sync>;

/// A `String -> Value` map with per-key change callbacks.
///
/// Reads, deletes, and iteration have no callback semantics; only `set`
/// does. A write whose new value is deep-structurally equal to the
/// previous one (see [`Value`]'s `PartialEq`) is a no-op: nothing is
/// stored, nothing fires.
#[derive(Debug, Clone, Default)]
pub struct ObservedMap {
    owner_id: String,
    values: AttributeMap,
    #[allow(clippy::type_complexity)]
    callbacks: HashMap<String, Vec<AttrCallback>>,
}

impl ObservedMap {
    pub fn new(owner_id: impl Into<String>) -> Self {
        ObservedMap {
            owner_id: owner_id.into(),
            values: AttributeMap::new(),
            callbacks: HashMap::new(),
        }
    }

    pub fn from_map(owner_id: impl Into<String>, values: AttributeMap) -> Self {
        ObservedMap {
            owner_id: owner_id.into(),
            values,
            callbacks: HashMap::new(),
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.values.iter()
    }

    pub fn as_map(&self) -> &AttributeMap {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Register `cb` to fire whenever `key` changes.
    pub fn on_change(&mut self, key: impl Into<String>, cb: AttrCallback) {
        self.callbacks.entry(key.into()).or_default().push(cb);
    }

    /// Set `key = value`. No-op (and no callback) if `value` deep-equals the
    /// previous value. Otherwise stores the new value, then invokes every
    /// callback registered for `key`, in registration order, with
    /// `(owner_id, key, new_value, old_value)` — `old_value` is `Value::Null`
    /// if the key was previously absent.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        let old = self.values.get(&key).cloned().unwrap_or(Value::Null);
        if old == value {
            return;
        }
        self.values.insert(key.clone(), value.clone());
        if let Some(cbs) = self.callbacks.get(&key) {
            for cb in cbs {
                cb(&self.owner_id, &key, &value, &old);
            }
        }
    }

    /// Replace the whole map wholesale, bypassing per-key callbacks. Used by
    /// the LGF parser for edge attribute assignment and by subgraph
    /// construction, which both want to set a batch of values at once
    /// without firing change notifications meant for live mutation.
    pub fn replace_all(&mut self, values: AttributeMap) {
        self.values = values;
    }
}
