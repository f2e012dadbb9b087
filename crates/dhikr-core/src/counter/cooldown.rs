//! Cooldown controller.
//!
//! Gates increments on wall-clock time only; it knows nothing about items.
//! All times are epoch milliseconds supplied by the caller.

/// Cooldown used by per-dhikr surfaces.
pub const DEFAULT_COOLDOWN_MS: u64 = 1_500;
/// Cooldown used by the aggregate campaign surface.
pub const CAMPAIGN_COOLDOWN_MS: u64 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cooldown {
    duration_ms: u64,
    locked_until_ms: Option<u64>,
}

impl Cooldown {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            locked_until_ms: None,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn locked_until_ms(&self) -> Option<u64> {
        self.locked_until_ms
    }

    pub fn is_locked(&self, now_ms: u64) -> bool {
        self.locked_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Accept an interaction at `now_ms` and start a new lock.
    ///
    /// Returns `false` without touching state while still locked.
    pub fn try_lock(&mut self, now_ms: u64) -> bool {
        if self.is_locked(now_ms) {
            return false;
        }
        self.locked_until_ms = Some(now_ms.saturating_add(self.duration_ms));
        true
    }

    /// Time left on the lock, clamped at zero.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.locked_until_ms
            .map(|until| until.saturating_sub(now_ms))
            .unwrap_or(0)
    }

    /// 1.0 right after locking, falling to 0.0 at expiry.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        (self.remaining_ms(now_ms) as f64 / self.duration_ms as f64).min(1.0)
    }

    pub fn reset(&mut self) {
        self.locked_until_ms = None;
    }
}

impl Default for Cooldown {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_MS)
    }
}
