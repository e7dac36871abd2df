//! Key/value configuration store port.
//!
//! The store backend is opaque to the engine. A missing key and an empty
//! value are treated the same way by callers.

use std::collections::HashMap;

/// String-valued configuration lookup.
pub trait ConfigStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Value stored under `key`, or `default` when absent.
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }
}

impl ConfigStore for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
