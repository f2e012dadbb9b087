//! In-memory persistence for tests and surfaces that never touch disk.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::Persistence;
use crate::error::{CoreError, Result};

/// A shared map. Clones see the same data, so a test can keep a handle
/// while an engine owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, as if a previous run had saved it.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl Persistence for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .entries
            .lock()
            .map_err(|_| CoreError::Custom("memory backend poisoned".into()))?;
        Ok(map.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self
            .entries
            .lock()
            .map_err(|_| CoreError::Custom("memory backend poisoned".into()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();
        backend.save("k", "v").unwrap();
        assert_eq!(handle.get("k").as_deref(), Some("v"));
        assert!(handle.load("missing").unwrap().is_none());
    }
}
