//! Fixed adhkar catalog.
//!
//! Each category is walked as a bounded sequence: no wrap-around, and the
//! end of the category asks before leaving. Counts are session-only.

mod data;

use serde::Serialize;

use crate::counter::{CounterEngine, CounterItem, EngineConfig, NavigationMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: &'static str,
    pub text: &'static str,
    pub target: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtue: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub entries: &'static [Entry],
}

impl Category {
    /// Engine item id for an entry of this category.
    pub fn item_id(&self, entry: &Entry) -> String {
        format!("{}_{}", self.id, entry.id)
    }

    /// The category's entries as fresh counter items.
    pub fn items(&self) -> Vec<CounterItem> {
        self.entries
            .iter()
            .map(|entry| {
                let item = CounterItem::new(self.item_id(entry), entry.text, entry.target);
                match entry.virtue {
                    Some(virtue) => item.with_virtue(virtue),
                    None => item,
                }
            })
            .collect()
    }

    /// A session over this category. Navigation is always bounded and
    /// nothing is persisted; only the cooldown is taken from `config`.
    pub fn engine(&self, config: EngineConfig) -> CounterEngine {
        let config = EngineConfig {
            navigation: NavigationMode::Bounded,
            seed: Vec::new(),
            ..config
        };
        CounterEngine::ephemeral(config, self.items())
    }
}

/// All built-in categories in display order.
pub fn builtin() -> &'static [Category] {
    data::CATEGORIES
}

pub fn find(id: &str) -> Option<&'static Category> {
    builtin().iter().find(|c| c.id == id)
}

/// Categories whose title contains `query`. An empty query matches all.
pub fn search(query: &str) -> Vec<&'static Category> {
    let query = query.trim();
    builtin()
        .iter()
        .filter(|c| c.title.contains(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{ConfirmKind, DEFAULT_COOLDOWN_MS};
    use crate::events::Event;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_targets_positive() {
        let mut seen = HashSet::new();
        for category in builtin() {
            assert!(!category.entries.is_empty(), "{} is empty", category.id);
            for entry in category.entries {
                assert!(entry.target > 0, "{} has no target", entry.id);
                assert!(seen.insert(category.item_id(entry)));
            }
        }
    }

    #[test]
    fn search_matches_title_substring() {
        assert_eq!(search("").len(), builtin().len());
        let hits = search("الصلاة");
        assert!(hits.iter().any(|c| c.id == "prayer"));
        assert!(hits.iter().all(|c| c.title.contains("الصلاة")));
        assert!(search("zzz").is_empty());
    }

    #[test]
    fn items_carry_prefixed_ids_and_virtues() {
        let category = find("toilet").unwrap();
        let items = category.items();
        assert_eq!(items[0].id, "toilet_t1");
        assert_eq!(items[1].virtue.as_deref(), Some("عند الخروج"));
        assert!(items.iter().all(|i| i.count == 0));
    }

    #[test]
    fn session_walks_to_end_then_asks() {
        let category = find("toilet").unwrap();
        let mut engine = category.engine(EngineConfig::default());
        let step = DEFAULT_COOLDOWN_MS;

        engine.increment(0);
        engine.tick(step);
        assert_eq!(engine.active_id(), Some("toilet_t2"));

        engine.increment(step);
        let events = engine.tick(2 * step);
        assert!(events.iter().any(|e| matches!(e,
            Event::ConfirmationRequested { request, .. } if request.kind == ConfirmKind::FinishSequence)));
    }

    #[test]
    fn session_ignores_requested_wrap() {
        let category = find("sick").unwrap();
        let engine = category.engine(EngineConfig {
            navigation: NavigationMode::Cyclic,
            ..EngineConfig::default()
        });
        assert_eq!(engine.config().navigation, NavigationMode::Bounded);
        assert_eq!(engine.items()[1].target, 7);
    }
}
