mod config;
pub mod database;
pub mod memory;

pub use config::{AdhkarSection, CampaignSection, Config, FeedbackSection, SurfaceSection, TASBIH_KEY};
pub use database::Database;
pub use memory::MemoryBackend;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Durable text storage keyed per surface.
///
/// The engine only ever stores whole serialized values, so two operations
/// are enough. Implementations must treat a missing key as `Ok(None)`.
pub trait Persistence {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `DHIKR_DATA_DIR` overrides everything. Otherwise `~/.config/dhikr`, or
/// `~/.config/dhikr-dev` when `DHIKR_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("DHIKR_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .ok_or_else(|| ConfigError::DataDir("home directory not found".into()))?
                .join(".config");
            let env = std::env::var("DHIKR_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("dhikr-dev")
            } else {
                base_dir.join("dhikr")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
