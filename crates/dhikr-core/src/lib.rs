//! # Dhikr Core Library
//!
//! This library provides the counting engine behind the `dhikr` CLI: named
//! recitations with optional targets, a cooldown between taps, completion
//! detection with deferred reset-and-advance, and durable per-item
//! statistics.
//!
//! ## Architecture
//!
//! - **Counter Engine**: A wall-clock-based state machine, one instance per
//!   surface, that requires the caller to periodically invoke `tick()` so
//!   deferred completions fire on time
//! - **Storage**: SQLite key-value persistence and TOML-based configuration
//! - **Campaign**: A single open-ended counter with a scalar lifetime total
//! - **Catalog**: Fixed adhkar categories walked as bounded sequences
//!
//! ## Key Components
//!
//! - [`CounterEngine`]: Core counting state machine
//! - [`ItemStore`]: Ordered item collection with injected persistence
//! - [`Database`]: Durable key-value storage
//! - [`Config`]: Application configuration management

pub mod campaign;
pub mod catalog;
pub mod counter;
pub mod error;
pub mod events;
pub mod storage;

pub use campaign::{CampaignCounter, CampaignSettings};
pub use counter::{
    ConfirmKind, ConfirmationRequest, Cooldown, CounterEngine, CounterItem, EngineConfig,
    EngineState, ItemStore, NavigationMode,
};
pub use error::{ConfigError, CoreError, DatabaseError};
pub use events::{Event, FeedbackKind};
pub use storage::{Config, Database, MemoryBackend, Persistence};
