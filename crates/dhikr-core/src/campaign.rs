//! The aggregate campaign counter.
//!
//! A degenerate engine surface: one synthetic open-ended item, no
//! navigation, a longer cooldown. Its durable state is a single scalar
//! lifetime total rather than an item collection. The total is local to
//! this device; nothing is aggregated across users.

use tracing::{debug, warn};

use crate::counter::{
    CounterEngine, CounterItem, EngineConfig, EngineState, NavigationMode, CAMPAIGN_COOLDOWN_MS,
};
use crate::events::Event;
use crate::storage::Persistence;

/// Default campaign goal: one billion.
pub const CAMPAIGN_GOAL: u64 = 1_000_000_000;
/// Storage key of the scalar total.
pub const CAMPAIGN_KEY: &str = "campaign_total";

const CAMPAIGN_ITEM_ID: &str = "campaign";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignSettings {
    pub key: String,
    pub cooldown_ms: u64,
    pub goal: u64,
}

impl Default for CampaignSettings {
    fn default() -> Self {
        Self {
            key: CAMPAIGN_KEY.to_string(),
            cooldown_ms: CAMPAIGN_COOLDOWN_MS,
            goal: CAMPAIGN_GOAL,
        }
    }
}

pub struct CampaignCounter {
    engine: CounterEngine,
    backend: Box<dyn Persistence>,
    settings: CampaignSettings,
}

impl std::fmt::Debug for CampaignCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampaignCounter")
            .field("settings", &self.settings)
            .field("total", &self.total())
            .finish()
    }
}

/// Parse the persisted total. Anything but a non-negative integer reads as 0.
fn parse_total(key: &str, text: &str) -> u64 {
    match text.trim().parse::<u64>() {
        Ok(total) => total,
        Err(e) => {
            warn!(key, "discarding unparsable campaign total {text:?}: {e}");
            0
        }
    }
}

impl CampaignCounter {
    pub fn open(settings: CampaignSettings, backend: Box<dyn Persistence>) -> Self {
        let total = match backend.load(&settings.key) {
            Ok(Some(text)) => parse_total(&settings.key, &text),
            Ok(None) => 0,
            Err(e) => {
                warn!(key = %settings.key, "failed to read campaign total: {e}");
                0
            }
        };

        let mut item = CounterItem::new(CAMPAIGN_ITEM_ID, "الصلاة على النبي", 0);
        item.total_all_time = total;
        let engine = CounterEngine::ephemeral(
            EngineConfig {
                surface: settings.key.clone(),
                cooldown_ms: settings.cooldown_ms,
                navigation: NavigationMode::Bounded,
                seed: Vec::new(),
            },
            vec![item],
        );
        debug!(key = %settings.key, total, "campaign counter opened");
        Self {
            engine,
            backend,
            settings,
        }
    }

    pub fn settings(&self) -> &CampaignSettings {
        &self.settings
    }

    /// Lifetime total of accepted taps.
    pub fn total(&self) -> u64 {
        self.engine
            .active_item()
            .map(|item| item.total_all_time)
            .unwrap_or(0)
    }

    /// Percentage of the goal reached, uncapped.
    pub fn progress_pct(&self) -> f64 {
        if self.settings.goal == 0 {
            return 0.0;
        }
        self.total() as f64 / self.settings.goal as f64 * 100.0
    }

    pub fn state(&self, now_ms: u64) -> EngineState {
        self.engine.state(now_ms)
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.engine.cooldown().remaining_ms(now_ms)
    }

    pub fn cooldown_progress(&self, now_ms: u64) -> f64 {
        self.engine.cooldown().progress(now_ms)
    }

    /// Count one tap. An accepted tap is saved right away; a save failure is
    /// logged and the in-memory total stays authoritative.
    pub fn tap(&mut self, now_ms: u64) -> Vec<Event> {
        let events = self.engine.increment(now_ms);
        if events.iter().any(Event::is_increment) {
            if let Err(e) = self.backend.save(&self.settings.key, &self.total().to_string()) {
                warn!(key = %self.settings.key, "failed to save campaign total: {e}");
            }
        }
        events
    }

    pub fn snapshot(&self, now_ms: u64) -> Event {
        self.engine.snapshot(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn open(backend: &MemoryBackend) -> CampaignCounter {
        CampaignCounter::open(CampaignSettings::default(), Box::new(backend.clone()))
    }

    #[test]
    fn starts_from_saved_total() {
        let backend = MemoryBackend::new().with_entry(CAMPAIGN_KEY, "41");
        let campaign = open(&backend);
        assert_eq!(campaign.total(), 41);
    }

    #[test]
    fn garbage_total_reads_as_zero() {
        let backend = MemoryBackend::new().with_entry(CAMPAIGN_KEY, "lots");
        assert_eq!(open(&backend).total(), 0);
        let backend = MemoryBackend::new().with_entry(CAMPAIGN_KEY, "-5");
        assert_eq!(open(&backend).total(), 0);
    }

    #[test]
    fn tap_is_gated_by_two_second_cooldown() {
        let backend = MemoryBackend::new();
        let mut campaign = open(&backend);
        assert!(campaign.tap(0).iter().any(Event::is_increment));
        assert!(campaign.tap(1_999).is_empty());
        assert_eq!(campaign.remaining_ms(1_000), 1_000);
        assert!(campaign.tap(2_000).iter().any(Event::is_increment));
        assert_eq!(campaign.total(), 2);
        assert_eq!(backend.get(CAMPAIGN_KEY).as_deref(), Some("2"));
    }

    #[test]
    fn never_completes() {
        let mut campaign = open(&MemoryBackend::new());
        for n in 0..5 {
            campaign.tap(n * CAMPAIGN_COOLDOWN_MS);
        }
        assert_eq!(campaign.state(5 * CAMPAIGN_COOLDOWN_MS), EngineState::Idle);
        assert_eq!(campaign.total(), 5);
    }

    #[test]
    fn progress_is_relative_to_goal() {
        let backend = MemoryBackend::new().with_entry(CAMPAIGN_KEY, "10000000");
        let campaign = open(&backend);
        assert!((campaign.progress_pct() - 1.0).abs() < 1e-9);

        let zero_goal = CampaignCounter::open(
            CampaignSettings {
                goal: 0,
                ..CampaignSettings::default()
            },
            Box::new(backend),
        );
        assert_eq!(zero_goal.progress_pct(), 0.0);
    }
}
