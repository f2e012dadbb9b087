mod confirm;
mod cooldown;
mod engine;
mod item;
pub mod navigation;
pub mod store;

pub use confirm::{ConfirmKind, ConfirmationRequest};
pub use cooldown::{Cooldown, CAMPAIGN_COOLDOWN_MS, DEFAULT_COOLDOWN_MS};
pub use engine::{CounterEngine, EngineConfig, EngineState, TaskHandle};
pub use item::{default_seed, normalize_name, parse_target, CounterItem, MAX_NAME_CHARS};
pub use navigation::{classify_swipe, Direction, NavigationMode, Step, SwipeTracker, SWIPE_THRESHOLD_PX};
pub use store::ItemStore;
