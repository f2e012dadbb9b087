//! TOML-based application configuration.
//!
//! Stores per-surface engine settings:
//! - Custom tasbih: cooldown and wrap-around navigation
//! - Adhkar catalog sessions: cooldown
//! - Campaign counter: cooldown and goal
//! - Feedback toggles consumed by frontends
//!
//! Configuration is stored at `~/.config/dhikr/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::campaign::{CampaignSettings, CAMPAIGN_GOAL};
use crate::counter::{
    default_seed, EngineConfig, NavigationMode, CAMPAIGN_COOLDOWN_MS, DEFAULT_COOLDOWN_MS,
};
use crate::error::{ConfigError, Result};

/// Storage key of the custom tasbih collection.
pub const TASBIH_KEY: &str = "tasbih_items";

/// Custom tasbih surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceSection {
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    #[serde(default = "default_true")]
    pub wrap_navigation: bool,
}

/// Catalog sessions. Always bounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdhkarSection {
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSection {
    #[serde(default = "default_campaign_cooldown_ms")]
    pub cooldown_ms: u64,
    #[serde(default = "default_goal")]
    pub goal: u64,
}

/// Feedback toggles. The engine always emits signals; frontends filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSection {
    #[serde(default = "default_true")]
    pub sound: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dhikr/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasbih: SurfaceSection,
    #[serde(default)]
    pub adhkar: AdhkarSection,
    #[serde(default)]
    pub campaign: CampaignSection,
    #[serde(default)]
    pub feedback: FeedbackSection,
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}
fn default_campaign_cooldown_ms() -> u64 {
    CAMPAIGN_COOLDOWN_MS
}
fn default_goal() -> u64 {
    CAMPAIGN_GOAL
}
fn default_true() -> bool {
    true
}

impl Default for SurfaceSection {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            wrap_navigation: true,
        }
    }
}

impl Default for AdhkarSection {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

impl Default for CampaignSection {
    fn default() -> Self {
        Self {
            cooldown_ms: default_campaign_cooldown_ms(),
            goal: default_goal(),
        }
    }
}

impl Default for FeedbackSection {
    fn default() -> Self {
        Self {
            sound: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("using default configuration: {e}");
            Self::default()
        })
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a leaf value by dot-separated key, without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// Set a value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Engine settings for the persisted custom tasbih.
    pub fn tasbih_engine(&self) -> EngineConfig {
        EngineConfig {
            surface: TASBIH_KEY.to_string(),
            cooldown_ms: self.tasbih.cooldown_ms,
            navigation: if self.tasbih.wrap_navigation {
                NavigationMode::Cyclic
            } else {
                NavigationMode::Bounded
            },
            seed: default_seed(),
        }
    }

    /// Engine settings for a catalog category session.
    pub fn adhkar_engine(&self, category_id: &str) -> EngineConfig {
        EngineConfig {
            surface: format!("adhkar_{category_id}"),
            cooldown_ms: self.adhkar.cooldown_ms,
            navigation: NavigationMode::Bounded,
            seed: Vec::new(),
        }
    }

    pub fn campaign_settings(&self) -> CampaignSettings {
        CampaignSettings {
            cooldown_ms: self.campaign.cooldown_ms,
            goal: self.campaign.goal,
            ..CampaignSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.tasbih.cooldown_ms, 1_500);
        assert_eq!(parsed.campaign.cooldown_ms, 2_000);
        assert!(parsed.tasbih.wrap_navigation);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[tasbih]\ncooldown_ms = 900\n").unwrap();
        assert_eq!(parsed.tasbih.cooldown_ms, 900);
        assert!(parsed.tasbih.wrap_navigation);
        assert_eq!(parsed.campaign.goal, CAMPAIGN_GOAL);
        assert!(parsed.feedback.sound);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("tasbih.cooldown_ms").as_deref(), Some("1500"));
        assert_eq!(cfg.get("feedback.sound").as_deref(), Some("true"));
        assert!(cfg.get("tasbih").is_none());
        assert!(cfg.get("tasbih.missing_key").is_none());
    }

    #[test]
    fn apply_updates_nested_values() {
        let mut cfg = Config::default();
        cfg.apply("tasbih.wrap_navigation", "false").unwrap();
        cfg.apply("campaign.cooldown_ms", "2500").unwrap();
        assert!(!cfg.tasbih.wrap_navigation);
        assert_eq!(cfg.campaign.cooldown_ms, 2_500);
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(cfg.apply("tasbih.nonexistent", "1").is_err());
        assert!(cfg.apply("tasbih", "1").is_err());
        assert!(cfg.apply("", "1").is_err());
    }

    #[test]
    fn apply_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.apply("feedback.sound", "loud").is_err());
        assert!(cfg.apply("tasbih.cooldown_ms", "-1").is_err());
        assert!(cfg.feedback.sound);
    }

    #[test]
    fn wrap_toggle_selects_navigation_mode() {
        let mut cfg = Config::default();
        assert_eq!(cfg.tasbih_engine().navigation, NavigationMode::Cyclic);
        cfg.tasbih.wrap_navigation = false;
        assert_eq!(cfg.tasbih_engine().navigation, NavigationMode::Bounded);
        assert_eq!(cfg.adhkar_engine("morning").navigation, NavigationMode::Bounded);
    }
}
