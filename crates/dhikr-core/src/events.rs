use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::counter::{ConfirmationRequest, CounterItem, EngineState};

/// Every observable state change of an engine produces an Event.
/// Frontends render them; the engine never waits on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Incremented {
        item_id: String,
        count: u64,
        target: u64,
        total_all_time: u64,
        at: DateTime<Utc>,
    },
    /// Haptic/audio cue for the frontend.
    Feedback {
        kind: FeedbackKind,
        at: DateTime<Utc>,
    },
    TargetReached {
        item_id: String,
        completions: u64,
        /// When the deferred reset-and-advance is due.
        advance_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    CountReset {
        item_id: String,
        reason: ResetReason,
        at: DateTime<Utc>,
    },
    AutoAdvanced {
        from: String,
        to: String,
        at: DateTime<Utc>,
    },
    Selected {
        item_id: String,
        at: DateTime<Utc>,
    },
    ConfirmationRequested {
        request: ConfirmationRequest,
        at: DateTime<Utc>,
    },
    ConfirmationDeclined {
        request_id: u64,
        at: DateTime<Utc>,
    },
    ItemDeleted {
        item_id: String,
        at: DateTime<Utc>,
    },
    /// A bounded sequence was finished and left; nothing is active.
    SequenceFinished {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        surface: String,
        state: EngineState,
        active_item: Option<CounterItem>,
        active_index: Option<usize>,
        item_count: usize,
        cooldown_remaining_ms: u64,
        cooldown_progress: f64,
        pending_confirmation: Option<ConfirmationRequest>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// True for the event that marks an accepted increment.
    pub fn is_increment(&self) -> bool {
        matches!(self, Event::Incremented { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetReason {
    Completion,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    /// Every accepted increment.
    Light,
    /// Target completion.
    Strong,
}

/// A short sine sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_ms: u64,
}

impl FeedbackKind {
    /// Vibration pattern in milliseconds (on, off, on, ...).
    pub fn vibration_ms(self) -> &'static [u64] {
        match self {
            FeedbackKind::Light => &[15],
            FeedbackKind::Strong => &[50, 50, 50],
        }
    }

    pub fn tone(self) -> Option<Tone> {
        match self {
            FeedbackKind::Light => Some(Tone {
                start_hz: 800.0,
                end_hz: 300.0,
                duration_ms: 100,
            }),
            FeedbackKind::Strong => None,
        }
    }
}

/// Convert caller-supplied epoch milliseconds into an event timestamp.
pub fn timestamp(now_ms: u64) -> DateTime<Utc> {
    i64::try_from(now_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or_default()
}

/// Wall-clock epoch milliseconds, for callers driving an engine in real time.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let ev = Event::Feedback {
            kind: FeedbackKind::Strong,
            at: timestamp(0),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "Feedback");
        assert_eq!(json["kind"], "strong");
    }

    #[test]
    fn feedback_patterns() {
        assert_eq!(FeedbackKind::Light.vibration_ms(), &[15]);
        assert_eq!(FeedbackKind::Strong.vibration_ms(), &[50, 50, 50]);
        let tone = FeedbackKind::Light.tone().unwrap();
        assert_eq!((tone.start_hz, tone.end_hz, tone.duration_ms), (800.0, 300.0, 100));
        assert!(FeedbackKind::Strong.tone().is_none());
    }

    #[test]
    fn timestamp_maps_epoch_millis() {
        assert_eq!(timestamp(1_500).timestamp_millis(), 1_500);
        assert_eq!(timestamp(u64::MAX), DateTime::<Utc>::default());
    }
}
