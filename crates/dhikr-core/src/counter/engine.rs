//! Counting state machine.
//!
//! One engine per independent surface. Like the rest of the crate it owns no
//! threads and reads no clock: every call takes `now_ms` and the caller is
//! responsible for calling `tick()` periodically so that deferred
//! completions fire on time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Locked -> Idle                      (plain increment)
//! Idle -> Locked -> Completing -> Idle        (increment reaching target)
//! ```
//!
//! `Completing` lasts one cooldown: when it ends the completed item's count
//! is zeroed and the next item becomes active.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CounterEngine::open(config.tasbih_engine(), Box::new(db));
//! engine.increment(now_ms());
//! // In a loop:
//! engine.tick(now_ms()); // Fires the deferred reset-and-advance when due
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::confirm::{ConfirmKind, ConfirmationRequest};
use super::cooldown::{Cooldown, DEFAULT_COOLDOWN_MS};
use super::item::{default_seed, CounterItem};
use super::navigation::{self, classify_swipe, Direction, NavigationMode, Step, SwipeTracker};
use super::store::ItemStore;
use crate::events::{timestamp, Event, FeedbackKind, ResetReason};
use crate::storage::{Persistence, TASBIH_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    Idle,
    Locked,
    /// Target reached; the reset-and-advance is scheduled.
    Completing,
}

/// Per-surface settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Storage key, and the name the surface reports in snapshots.
    pub surface: String,
    pub cooldown_ms: u64,
    pub navigation: NavigationMode,
    /// Used when the surface has no prior state.
    pub seed: Vec<CounterItem>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surface: TASBIH_KEY.to_string(),
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            navigation: NavigationMode::Cyclic,
            seed: default_seed(),
        }
    }
}

/// Identifies a scheduled completion. A task whose generation no longer
/// matches the engine's was overtaken by a deliberate selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHandle {
    pub item_id: String,
    pub generation: u64,
}

#[derive(Debug, Clone)]
struct ScheduledAdvance {
    handle: TaskHandle,
    due_at_ms: u64,
    /// Resolved when the increment happened, not when the task fires.
    step: Step,
}

#[derive(Debug)]
pub struct CounterEngine {
    config: EngineConfig,
    store: ItemStore,
    cooldown: Cooldown,
    active_id: Option<String>,
    generation: u64,
    pending: Option<ScheduledAdvance>,
    confirmation: Option<ConfirmationRequest>,
    next_request_id: u64,
    finished: bool,
}

impl CounterEngine {
    /// Load the surface's collection from `backend` and start on its first item.
    pub fn open(config: EngineConfig, backend: Box<dyn Persistence>) -> Self {
        let store = ItemStore::load(config.surface.clone(), backend, &config.seed);
        Self::with_store(config, store)
    }

    /// A surface whose items live only as long as the engine.
    pub fn ephemeral(config: EngineConfig, items: Vec<CounterItem>) -> Self {
        let store = ItemStore::in_memory(config.surface.clone(), items);
        Self::with_store(config, store)
    }

    pub fn with_store(config: EngineConfig, store: ItemStore) -> Self {
        let active_id = store.first_id().map(str::to_owned);
        Self {
            cooldown: Cooldown::new(config.cooldown_ms),
            config,
            store,
            active_id,
            generation: 0,
            pending: None,
            confirmation: None,
            next_request_id: 1,
            finished: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn items(&self) -> &[CounterItem] {
        self.store.items()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_item(&self) -> Option<&CounterItem> {
        self.store.get(self.active_id.as_deref()?)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.store.position(self.active_id.as_deref()?)
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    /// Handle of the outstanding completion task, if any. A task overtaken
    /// by a deliberate selection stays queued until due but is not reported.
    pub fn pending_task(&self) -> Option<&TaskHandle> {
        self.live_task().map(|t| &t.handle)
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmationRequest> {
        self.confirmation.as_ref()
    }

    /// Whether a bounded sequence was finished and left.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn state(&self, now_ms: u64) -> EngineState {
        if self.live_task().is_some() {
            EngineState::Completing
        } else if self.cooldown.is_locked(now_ms) {
            EngineState::Locked
        } else {
            EngineState::Idle
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, now_ms: u64) -> Event {
        Event::StateSnapshot {
            surface: self.config.surface.clone(),
            state: self.state(now_ms),
            active_item: self.active_item().cloned(),
            active_index: self.active_index(),
            item_count: self.store.len(),
            cooldown_remaining_ms: self.cooldown.remaining_ms(now_ms),
            cooldown_progress: self.cooldown.progress(now_ms),
            pending_confirmation: self.confirmation.clone(),
            at: timestamp(now_ms),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Call periodically. Fires the deferred completion once it is due.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Event> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|t| now_ms >= t.due_at_ms);
        match self.pending.take() {
            Some(task) if due => self.fire(task, now_ms),
            other => {
                self.pending = other;
                Vec::new()
            }
        }
    }

    /// Count one recitation on the active item.
    ///
    /// Returns no `Incremented` event when the tap was rejected: cooldown
    /// still running, nothing active, or a confirmation awaiting an answer.
    pub fn increment(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = self.tick(now_ms);

        let Some(item_id) = self.active_id.clone() else {
            trace!(surface = %self.config.surface, "tap ignored: no active item");
            return events;
        };
        if self.confirmation.is_some() {
            trace!(surface = %self.config.surface, "tap ignored: confirmation open");
            return events;
        }
        if self.cooldown.is_locked(now_ms) {
            trace!(
                surface = %self.config.surface,
                remaining_ms = self.cooldown.remaining_ms(now_ms),
                "tap ignored: cooling down"
            );
            return events;
        }
        let Some((item, reached)) = self.store.record_increment(&item_id) else {
            return events;
        };
        self.cooldown.try_lock(now_ms);

        let at = timestamp(now_ms);
        events.push(Event::Incremented {
            item_id: item.id.clone(),
            count: item.count,
            target: item.target,
            total_all_time: item.total_all_time,
            at,
        });
        events.push(Event::Feedback {
            kind: FeedbackKind::Light,
            at,
        });

        if reached {
            let due_at_ms = now_ms.saturating_add(self.config.cooldown_ms);
            let step = navigation::step(
                self.config.navigation,
                Direction::Next,
                Some(&item.id),
                self.store.items(),
            );
            debug!(
                surface = %self.config.surface,
                item_id = %item.id,
                completions = item.completions,
                ?step,
                "target reached"
            );
            self.pending = Some(ScheduledAdvance {
                handle: TaskHandle {
                    item_id: item.id.clone(),
                    generation: self.generation,
                },
                due_at_ms,
                step,
            });
            events.push(Event::TargetReached {
                item_id: item.id,
                completions: item.completions,
                advance_at: timestamp(due_at_ms),
                at,
            });
            events.push(Event::Feedback {
                kind: FeedbackKind::Strong,
                at,
            });
        }
        events
    }

    /// Zero the active item's count and lift the cooldown.
    ///
    /// Statistics are untouched; this never counts as a completion.
    pub fn reset(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = self.tick(now_ms);
        let Some(item_id) = self.active_id.clone() else {
            return events;
        };
        if let Some(task) = self.take_live_task() {
            if task.handle.item_id != item_id {
                events.extend(self.settle(&task.handle.item_id, now_ms));
            }
        }
        self.store.reset_count(&item_id);
        self.cooldown.reset();
        events.push(Event::CountReset {
            item_id,
            reason: ResetReason::Manual,
            at: timestamp(now_ms),
        });
        events
    }

    pub fn select_next(&mut self, now_ms: u64) -> Vec<Event> {
        self.navigate(Direction::Next, now_ms)
    }

    pub fn select_previous(&mut self, now_ms: u64) -> Vec<Event> {
        self.navigate(Direction::Previous, now_ms)
    }

    /// Apply a finished horizontal drag. Short drags do nothing.
    pub fn swipe(&mut self, start_x: f32, end_x: f32, now_ms: u64) -> Vec<Event> {
        match classify_swipe(start_x, end_x) {
            Some(direction) => self.navigate(direction, now_ms),
            None => self.tick(now_ms),
        }
    }

    /// Make `item_id` active. Unknown ids are ignored; re-selecting the
    /// active item keeps its cooldown and pending completion.
    pub fn select(&mut self, item_id: &str, now_ms: u64) -> Vec<Event> {
        let mut events = self.tick(now_ms);
        if !self.store.contains(item_id) {
            return events;
        }
        if self.active_id.as_deref() != Some(item_id) {
            events.extend(self.activate(Some(item_id.to_string()), now_ms));
        }
        events.push(Event::Selected {
            item_id: item_id.to_string(),
            at: timestamp(now_ms),
        });
        events
    }

    /// Finish a tracked drag gesture. Gestures without movement do nothing.
    pub fn end_gesture(&mut self, gesture: &mut SwipeTracker, now_ms: u64) -> Vec<Event> {
        match gesture.touch_end() {
            Some(direction) => self.navigate(direction, now_ms),
            None => self.tick(now_ms),
        }
    }

    /// Add an item and make it active. `None` when the name is blank.
    pub fn create(&mut self, name: &str, target: &str, now_ms: u64) -> Option<CounterItem> {
        let item = self.store.create(name, target)?;
        self.activate(Some(item.id.clone()), now_ms);
        Some(item)
    }

    /// Rename and retarget. Blank names and unknown ids are ignored.
    pub fn update(&mut self, item_id: &str, name: &str, target: &str) -> bool {
        self.store.update(item_id, name, target)
    }

    /// Remove an item immediately. The first remaining item becomes active
    /// when the deleted one was.
    pub fn delete(&mut self, item_id: &str, now_ms: u64) -> Option<CounterItem> {
        let removed = self.store.delete(item_id)?;
        if self
            .pending
            .as_ref()
            .is_some_and(|t| t.handle.item_id == item_id)
        {
            self.pending = None;
        }
        if self
            .confirmation
            .as_ref()
            .is_some_and(|c| refers_to(c, item_id))
        {
            self.confirmation = None;
        }
        if self.active_id.as_deref() == Some(item_id) {
            let first = self.store.first_id().map(str::to_owned);
            self.activate(first, now_ms);
        }
        debug!(surface = %self.config.surface, item_id, "item deleted");
        Some(removed)
    }

    /// Ask before zeroing the active item.
    pub fn request_reset(&mut self) -> Option<ConfirmationRequest> {
        let item_id = self.active_id.clone()?;
        Some(self.open_request(ConfirmKind::ResetCount { item_id }))
    }

    /// Ask before deleting an item.
    pub fn request_delete(&mut self, item_id: &str) -> Option<ConfirmationRequest> {
        if !self.store.contains(item_id) {
            return None;
        }
        Some(self.open_request(ConfirmKind::DeleteItem {
            item_id: item_id.to_string(),
        }))
    }

    /// Answer the open confirmation. A stale or unknown id is ignored;
    /// a "no" changes nothing.
    pub fn resolve_confirmation(&mut self, request_id: u64, accepted: bool, now_ms: u64) -> Vec<Event> {
        let matches = self
            .confirmation
            .as_ref()
            .is_some_and(|c| c.id == request_id);
        if !matches {
            return Vec::new();
        }
        let Some(request) = self.confirmation.take() else {
            return Vec::new();
        };
        let at = timestamp(now_ms);
        if !accepted {
            return vec![Event::ConfirmationDeclined { request_id, at }];
        }

        match request.kind {
            ConfirmKind::DeleteItem { item_id } => match self.delete(&item_id, now_ms) {
                Some(_) => vec![Event::ItemDeleted { item_id, at }],
                None => Vec::new(),
            },
            ConfirmKind::ResetCount { item_id } => {
                if self.active_id.as_deref() == Some(item_id.as_str()) {
                    self.reset(now_ms)
                } else if self.store.reset_count(&item_id) {
                    vec![Event::CountReset {
                        item_id,
                        reason: ResetReason::Manual,
                        at,
                    }]
                } else {
                    Vec::new()
                }
            }
            ConfirmKind::FinishSequence => {
                let mut events = self.activate(None, now_ms);
                self.finished = true;
                events.push(Event::SequenceFinished { at });
                events
            }
        }
    }

    /// Tear down: cancel the outstanding task and any open question.
    ///
    /// A cancelled completion still zeroes its item so nothing is left
    /// sitting on its target.
    pub fn shutdown(&mut self, now_ms: u64) -> Vec<Event> {
        self.confirmation = None;
        match self.take_live_task() {
            Some(task) => self.settle(&task.handle.item_id, now_ms),
            None => Vec::new(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn navigate(&mut self, direction: Direction, now_ms: u64) -> Vec<Event> {
        let mut events = self.tick(now_ms);
        let step = navigation::step(
            self.config.navigation,
            direction,
            self.active_id.as_deref(),
            self.store.items(),
        );
        match step {
            Step::To(id) => events.extend(self.select(&id, now_ms)),
            Step::EndOfSequence => events.push(self.request_finish(now_ms)),
            Step::Stay => {}
        }
        events
    }

    /// Deliberate change of the active item: settles any pending completion,
    /// invalidates outstanding task handles and lifts the cooldown. The task
    /// itself stays queued; its stale generation turns it into a no-op.
    fn activate(&mut self, item_id: Option<String>, now_ms: u64) -> Vec<Event> {
        let events = match self.live_task().map(|t| t.handle.item_id.clone()) {
            Some(completed) => self.settle(&completed, now_ms),
            None => Vec::new(),
        };
        self.generation += 1;
        self.cooldown.reset();
        self.active_id = item_id;
        if self.active_id.is_some() {
            self.finished = false;
        }
        events
    }

    fn live_task(&self) -> Option<&ScheduledAdvance> {
        self.pending
            .as_ref()
            .filter(|t| t.handle.generation == self.generation)
    }

    fn take_live_task(&mut self) -> Option<ScheduledAdvance> {
        self.pending
            .take()
            .filter(|t| t.handle.generation == self.generation)
    }

    /// Apply a cancelled task's count reset without its navigation.
    fn settle(&mut self, item_id: &str, now_ms: u64) -> Vec<Event> {
        if !self.store.reset_count(item_id) {
            return Vec::new();
        }
        debug!(surface = %self.config.surface, item_id, "completion settled early");
        vec![Event::CountReset {
            item_id: item_id.to_string(),
            reason: ResetReason::Completion,
            at: timestamp(now_ms),
        }]
    }

    fn fire(&mut self, task: ScheduledAdvance, now_ms: u64) -> Vec<Event> {
        let at = timestamp(now_ms);
        let item_id = task.handle.item_id;
        if task.handle.generation != self.generation {
            debug!(surface = %self.config.surface, item_id = %item_id, "stale completion dropped");
            return Vec::new();
        }
        if !self.store.reset_count(&item_id) {
            debug!(surface = %self.config.surface, item_id = %item_id, "completed item gone");
            return Vec::new();
        }
        let mut events = vec![Event::CountReset {
            item_id: item_id.clone(),
            reason: ResetReason::Completion,
            at,
        }];

        self.cooldown.reset();
        let step = match task.step {
            Step::To(next_id) if !self.store.contains(&next_id) => navigation::step(
                self.config.navigation,
                Direction::Next,
                Some(&item_id),
                self.store.items(),
            ),
            step => step,
        };
        match step {
            Step::To(to) => {
                self.active_id = Some(to.clone());
                if to != item_id {
                    debug!(surface = %self.config.surface, from = %item_id, to = %to, "auto-advanced");
                    events.push(Event::AutoAdvanced {
                        from: item_id,
                        to,
                        at,
                    });
                }
            }
            Step::EndOfSequence => events.push(self.request_finish(now_ms)),
            Step::Stay => {}
        }
        events
    }

    fn request_finish(&mut self, now_ms: u64) -> Event {
        Event::ConfirmationRequested {
            request: self.open_request(ConfirmKind::FinishSequence),
            at: timestamp(now_ms),
        }
    }

    /// Only one question is open at a time; a new one replaces the old.
    fn open_request(&mut self, kind: ConfirmKind) -> ConfirmationRequest {
        let request = ConfirmationRequest {
            id: self.next_request_id,
            kind,
        };
        self.next_request_id += 1;
        self.confirmation = Some(request.clone());
        request
    }
}

fn refers_to(request: &ConfirmationRequest, item_id: &str) -> bool {
    match &request.kind {
        ConfirmKind::DeleteItem { item_id: id } | ConfirmKind::ResetCount { item_id: id } => {
            id == item_id
        }
        ConfirmKind::FinishSequence => false,
    }
}
