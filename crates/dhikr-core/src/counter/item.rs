//! Countable items and the input coercion rules used when editing them.

use serde::{Deserialize, Serialize};

/// Longest display name accepted for an editable item, in characters.
pub const MAX_NAME_CHARS: usize = 300;

/// A single countable recitation.
///
/// Serialized with camelCase keys so persisted collections keep the
/// `totalAllTime` spelling used by existing saved state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterItem {
    pub id: String,
    pub name: String,
    /// Progress toward `target`; cycles back to zero on completion.
    #[serde(default)]
    pub count: u64,
    /// Zero means open-ended.
    #[serde(default)]
    pub target: u64,
    #[serde(default)]
    pub total_all_time: u64,
    #[serde(default)]
    pub completions: u64,
    /// Annotation shown under fixed catalog entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtue: Option<String>,
}

impl CounterItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, target: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count: 0,
            target,
            total_all_time: 0,
            completions: 0,
            virtue: None,
        }
    }

    pub fn with_virtue(mut self, virtue: impl Into<String>) -> Self {
        self.virtue = Some(virtue.into());
        self
    }

    pub fn is_open_ended(&self) -> bool {
        self.target == 0
    }

    /// Whether one more increment would complete a cycle.
    pub fn completes_on_next(&self) -> bool {
        self.target > 0 && self.count.saturating_add(1) >= self.target
    }

    /// 0.0 .. 1.0 progress toward the target; always 0.0 when open-ended.
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (self.count as f64 / self.target as f64).min(1.0)
    }
}

/// The collection used when no prior state exists.
pub fn default_seed() -> Vec<CounterItem> {
    vec![
        CounterItem::new("1", "استغفار", 100),
        CounterItem::new("2", "الصلاة على النبي", 1000),
        CounterItem::new("3", "سبحان الله وبحمده", 100),
    ]
}

/// Trim and bound a user-supplied name. `None` when nothing is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_NAME_CHARS).collect())
}

/// Coerce free-form target text into a target.
///
/// Reads the leading integer the way a lenient form field would: surrounding
/// whitespace is ignored, trailing garbage after the digits is dropped, and
/// anything unparsable or negative becomes `0` (open-ended).
pub fn parse_target(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return 0;
    }
    digits[..end].parse::<u64>().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_target_coerces_bad_input_to_open_ended() {
        assert_eq!(parse_target(""), 0);
        assert_eq!(parse_target("abc"), 0);
        assert_eq!(parse_target("-5"), 0);
        assert_eq!(parse_target("  33"), 33);
        assert_eq!(parse_target("12abc"), 12);
        assert_eq!(parse_target("+7"), 7);
        assert_eq!(parse_target("3.9"), 3);
    }

    #[test]
    fn parse_target_saturates_huge_values() {
        assert_eq!(parse_target("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn normalize_name_trims_and_bounds() {
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name("  تسبيح \n").as_deref(), Some("تسبيح"));

        let long = "س".repeat(MAX_NAME_CHARS + 20);
        let bounded = normalize_name(&long).unwrap();
        assert_eq!(bounded.chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn completes_on_next_requires_positive_target() {
        let mut item = CounterItem::new("a", "x", 0);
        item.count = 1_000;
        assert!(!item.completes_on_next());

        let mut item = CounterItem::new("b", "y", 3);
        item.count = 2;
        assert!(item.completes_on_next());
        item.count = 1;
        assert!(!item.completes_on_next());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let item = CounterItem::new("1", "استغفار", 100);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["totalAllTime"], 0);
        assert!(json.get("virtue").is_none());
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let item: CounterItem = serde_json::from_str(r#"{"id":"9","name":"x"}"#).unwrap();
        assert_eq!(item.count, 0);
        assert_eq!(item.target, 0);
        assert_eq!(item.completions, 0);
    }

    #[test]
    fn seed_has_three_targeted_items() {
        let seed = default_seed();
        assert_eq!(seed.len(), 3);
        assert!(seed.iter().all(|i| i.target > 0 && i.count == 0));
    }
}
