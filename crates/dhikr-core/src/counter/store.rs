//! The ordered item collection of one surface and its durable copy.
//!
//! Every mutation is followed by a save. Saves are fire-and-forget: a failed
//! write is logged and the in-memory collection stays authoritative.

use tracing::{debug, warn};
use uuid::Uuid;

use super::item::{normalize_name, parse_target, CounterItem};
use crate::error::Result;
use crate::storage::Persistence;

pub struct ItemStore {
    key: String,
    items: Vec<CounterItem>,
    backend: Option<Box<dyn Persistence>>,
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("key", &self.key)
            .field("items", &self.items)
            .field("persistent", &self.backend.is_some())
            .finish()
    }
}

/// Serialize a collection to its persisted text form.
pub fn encode(items: &[CounterItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse the persisted text form.
pub fn decode(text: &str) -> Result<Vec<CounterItem>> {
    Ok(serde_json::from_str(text)?)
}

impl ItemStore {
    /// Load the collection stored under `key`, falling back to `seed`.
    ///
    /// Missing, unreadable or malformed state is never fatal: it is logged
    /// and the seed becomes the initial state. Missing or malformed state is
    /// replaced by the seed right away; after a read error the saved copy is
    /// left untouched until the next mutation.
    pub fn load(key: impl Into<String>, backend: Box<dyn Persistence>, seed: &[CounterItem]) -> Self {
        let key = key.into();
        let (restored, reseed) = match backend.load(&key) {
            Ok(Some(text)) => match decode(&text) {
                Ok(items) => (Some(items), false),
                Err(e) => {
                    warn!(key = %key, "discarding unparsable saved items: {e}");
                    (None, true)
                }
            },
            Ok(None) => (None, true),
            Err(e) => {
                warn!(key = %key, "failed to read saved items: {e}");
                (None, false)
            }
        };

        match restored {
            Some(items) => Self {
                key,
                items,
                backend: Some(backend),
            },
            None => {
                debug!(key = %key, count = seed.len(), "seeding item collection");
                let store = Self {
                    key,
                    items: seed.to_vec(),
                    backend: Some(backend),
                };
                if reseed {
                    store.persist();
                }
                store
            }
        }
    }

    /// A store that never touches durable storage.
    pub fn in_memory(key: impl Into<String>, items: Vec<CounterItem>) -> Self {
        Self {
            key: key.into(),
            items,
            backend: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[CounterItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CounterItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn first_id(&self) -> Option<&str> {
        self.items.first().map(|i| i.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Write the full collection.
    ///
    /// # Errors
    /// Returns an error if encoding or the backend write fails.
    pub fn save(&self) -> Result<()> {
        let Some(backend) = &self.backend else {
            return Ok(());
        };
        backend.save(&self.key, &encode(&self.items)?)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(key = %self.key, "failed to save items: {e}");
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Append a new item. Returns `None` when the trimmed name is empty.
    pub fn create(&mut self, name: &str, target: &str) -> Option<CounterItem> {
        let name = normalize_name(name)?;
        let mut id = Uuid::new_v4().to_string();
        while self.contains(&id) {
            id = Uuid::new_v4().to_string();
        }
        let item = CounterItem::new(id, name, parse_target(target));
        self.items.push(item.clone());
        self.persist();
        Some(item)
    }

    /// Rename and retarget in place. Counters are left alone.
    ///
    /// Returns `false` (and changes nothing) for an empty name or unknown id.
    pub fn update(&mut self, id: &str, name: &str, target: &str) -> bool {
        let Some(name) = normalize_name(name) else {
            return false;
        };
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        item.name = name;
        item.target = parse_target(target);
        self.persist();
        true
    }

    pub fn delete(&mut self, id: &str) -> Option<CounterItem> {
        let idx = self.position(id)?;
        let removed = self.items.remove(idx);
        self.persist();
        Some(removed)
    }

    /// Apply one accepted increment.
    ///
    /// Returns the updated item and whether this increment reached the target.
    pub fn record_increment(&mut self, id: &str) -> Option<(CounterItem, bool)> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        let reached = item.completes_on_next();
        item.count = item.count.saturating_add(1);
        item.total_all_time = item.total_all_time.saturating_add(1);
        if reached {
            item.completions = item.completions.saturating_add(1);
        }
        let updated = item.clone();
        self.persist();
        Some((updated, reached))
    }

    /// Zero the progress counter. Lifetime statistics are untouched.
    pub fn reset_count(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        if item.count != 0 {
            item.count = 0;
            self.persist();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::item::default_seed;
    use crate::error::CoreError;
    use crate::storage::MemoryBackend;

    const KEY: &str = "tasbih_items";

    /// Reads always fail; writes go through.
    struct UnreadableBackend(MemoryBackend);

    impl Persistence for UnreadableBackend {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(CoreError::Custom("disk busy".into()))
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            self.0.save(key, value)
        }
    }

    fn store_with(backend: &MemoryBackend) -> ItemStore {
        ItemStore::load(KEY, Box::new(backend.clone()), &default_seed())
    }

    #[test]
    fn absent_state_loads_and_saves_seed() {
        let backend = MemoryBackend::new();
        let store = store_with(&backend);
        assert_eq!(store.items(), default_seed().as_slice());
        assert!(backend.get(KEY).is_some());
    }

    #[test]
    fn malformed_state_falls_back_to_seed() {
        let backend = MemoryBackend::new().with_entry(KEY, "{not json");
        let store = store_with(&backend);
        assert_eq!(store.len(), 3);
        assert_eq!(decode(&backend.get(KEY).unwrap()).unwrap(), default_seed());
    }

    #[test]
    fn read_error_seeds_without_overwriting_saved_state() {
        let saved = encode(&[CounterItem::new("mine", "تسبيح", 33)]).unwrap();
        let backend = MemoryBackend::new().with_entry(KEY, &saved);
        let mut store = ItemStore::load(
            KEY,
            Box::new(UnreadableBackend(backend.clone())),
            &default_seed(),
        );
        assert_eq!(store.items(), default_seed().as_slice());
        assert_eq!(backend.get(KEY).as_deref(), Some(saved.as_str()));

        store.record_increment("1");
        assert_ne!(backend.get(KEY).as_deref(), Some(saved.as_str()));
    }

    #[test]
    fn saved_empty_collection_stays_empty() {
        let backend = MemoryBackend::new().with_entry(KEY, "[]");
        let store = store_with(&backend);
        assert!(store.is_empty());
    }

    #[test]
    fn reload_is_lossless() {
        let backend = MemoryBackend::new();
        let mut store = store_with(&backend);
        let created = store.create("  تسبيح ", "33").unwrap();
        store.record_increment("1").unwrap();
        store.record_increment(&created.id).unwrap();

        let reloaded = store_with(&backend);
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn create_rejects_blank_names() {
        let mut store = ItemStore::in_memory(KEY, Vec::new());
        assert!(store.create("   ", "10").is_none());
        assert!(store.is_empty());

        let item = store.create("تسبيح", "").unwrap();
        assert_eq!(item.target, 0);
        assert_eq!(item.count, 0);
        assert_eq!(item.name, "تسبيح");
    }

    #[test]
    fn created_ids_are_unique() {
        let mut store = ItemStore::in_memory(KEY, Vec::new());
        let a = store.create("a", "").unwrap();
        let b = store.create("b", "").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn update_keeps_counters() {
        let mut store = ItemStore::in_memory(KEY, default_seed());
        store.record_increment("1");
        store.record_increment("1");
        assert!(store.update("1", "استغفار الله", "-3"));
        let item = store.get("1").unwrap();
        assert_eq!(item.name, "استغفار الله");
        assert_eq!(item.target, 0);
        assert_eq!(item.count, 2);
        assert_eq!(item.total_all_time, 2);

        assert!(!store.update("1", "  ", "5"));
        assert!(!store.update("missing", "x", "5"));
        assert_eq!(store.get("1").unwrap().target, 0);
    }

    #[test]
    fn delete_preserves_other_ids() {
        let mut store = ItemStore::in_memory(KEY, default_seed());
        let removed = store.delete("2").unwrap();
        assert_eq!(removed.id, "2");
        let ids: Vec<_> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert!(store.delete("2").is_none());
    }

    #[test]
    fn record_increment_flags_completion_at_target() {
        let mut item = CounterItem::new("x", "x", 3);
        item.count = 1;
        let mut store = ItemStore::in_memory(KEY, vec![item]);

        let (after, reached) = store.record_increment("x").unwrap();
        assert!(!reached);
        assert_eq!(after.count, 2);

        let (after, reached) = store.record_increment("x").unwrap();
        assert!(reached);
        assert_eq!(after.count, 3);
        assert_eq!(after.completions, 1);
        assert_eq!(after.total_all_time, 2);
    }

    #[test]
    fn reset_count_leaves_statistics() {
        let mut store = ItemStore::in_memory(KEY, default_seed());
        store.record_increment("3");
        assert!(store.reset_count("3"));
        let item = store.get("3").unwrap();
        assert_eq!(item.count, 0);
        assert_eq!(item.total_all_time, 1);
        assert!(!store.reset_count("nope"));
    }
}
