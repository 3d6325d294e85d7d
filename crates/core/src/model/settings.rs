use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("{field} must be > 0")]
    NotPositive { field: &'static str },

    #[error("{field} range is inverted")]
    InvertedRange { field: &'static str },

    #[error("reveal threshold must be in [0, 1]")]
    InvalidRevealThreshold,

    #[error("exactly four loading phrases are required, got {count}")]
    LoadingPhrases { count: usize },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tunable constants of the site's interactive behavior.
///
/// Durations are stored in milliseconds so the struct can be overridden from JSON;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub navbar_offset_px: f64,
    pub navbar_solid_after_px: f64,
    pub navbar_background: String,
    pub navbar_background_solid: String,
    pub navbar_throttle_ms: u64,
    pub nav_scroll_max_ms: u64,
    pub scroll_top_after_px: f64,
    pub scroll_top_throttle_ms: u64,
    pub scroll_top_max_ms: u64,
    pub mobile_breakpoint_px: f64,
    pub resize_debounce_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_stagger_ms: u64,
    pub low_fps_threshold: f64,
    pub loading_tick_min_ms: u64,
    pub loading_tick_max_ms: u64,
    pub loading_step_min: f64,
    pub loading_step_max: f64,
    pub loading_settle_ms: u64,
    pub loading_fade_ms: u64,
    pub loading_phrases: Vec<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            navbar_offset_px: 70.0,
            navbar_solid_after_px: 100.0,
            navbar_background: "rgba(255, 255, 255, 0.95)".into(),
            navbar_background_solid: "rgba(255, 255, 255, 0.98)".into(),
            navbar_throttle_ms: 16,
            nav_scroll_max_ms: 1000,
            scroll_top_after_px: 500.0,
            scroll_top_throttle_ms: 100,
            scroll_top_max_ms: 500,
            mobile_breakpoint_px: 768.0,
            resize_debounce_ms: 150,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".into(),
            reveal_stagger_ms: 100,
            low_fps_threshold: 30.0,
            loading_tick_min_ms: 150,
            loading_tick_max_ms: 250,
            loading_step_min: 5.0,
            loading_step_max: 30.0,
            loading_settle_ms: 200,
            loading_fade_ms: 300,
            loading_phrases: vec![
                "Preparing lessons...".into(),
                "Loading vocabulary...".into(),
                "Setting up quizzes...".into(),
                "Almost ready...".into(),
            ],
        }
    }
}

impl SiteSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` for non-positive intervals, inverted ranges,
    /// an out-of-range reveal threshold, or a phrase list that is not four long.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive_ms = [
            ("navbar_throttle_ms", self.navbar_throttle_ms),
            ("scroll_top_throttle_ms", self.scroll_top_throttle_ms),
            ("loading_tick_min_ms", self.loading_tick_min_ms),
        ];
        for (field, value) in positive_ms {
            if value == 0 {
                return Err(SettingsError::NotPositive { field });
            }
        }
        if !(self.loading_step_min > 0.0) {
            return Err(SettingsError::NotPositive {
                field: "loading_step_min",
            });
        }
        if !(self.mobile_breakpoint_px > 0.0) {
            return Err(SettingsError::NotPositive {
                field: "mobile_breakpoint_px",
            });
        }
        if self.loading_tick_min_ms > self.loading_tick_max_ms {
            return Err(SettingsError::InvertedRange {
                field: "loading_tick",
            });
        }
        if self.loading_step_min >= self.loading_step_max {
            return Err(SettingsError::InvertedRange {
                field: "loading_step",
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SettingsError::InvalidRevealThreshold);
        }
        if self.loading_phrases.len() != 4 {
            return Err(SettingsError::LoadingPhrases {
                count: self.loading_phrases.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn navbar_throttle(&self) -> Duration {
        Duration::from_millis(self.navbar_throttle_ms)
    }

    #[must_use]
    pub fn nav_scroll_max(&self) -> Duration {
        Duration::from_millis(self.nav_scroll_max_ms)
    }

    #[must_use]
    pub fn scroll_top_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_top_throttle_ms)
    }

    #[must_use]
    pub fn scroll_top_max(&self) -> Duration {
        Duration::from_millis(self.scroll_top_max_ms)
    }

    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    #[must_use]
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    #[must_use]
    pub fn loading_settle(&self) -> Duration {
        Duration::from_millis(self.loading_settle_ms)
    }

    #[must_use]
    pub fn loading_fade(&self) -> Duration {
        Duration::from_millis(self.loading_fade_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SiteSettings::default().validate().unwrap();
    }

    #[test]
    fn partial_json_overrides_keep_defaults() {
        let settings: SiteSettings =
            serde_json::from_str(r#"{"navbar_offset_px": 80.0}"#).unwrap();
        assert_eq!(settings.navbar_offset_px, 80.0);
        assert_eq!(settings.scroll_top_after_px, 500.0);
        settings.validate().unwrap();
    }

    #[test]
    fn inverted_loading_range_is_rejected() {
        let settings = SiteSettings {
            loading_tick_min_ms: 300,
            loading_tick_max_ms: 100,
            ..SiteSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvertedRange {
                field: "loading_tick"
            })
        );
    }

    #[test]
    fn phrase_count_is_checked() {
        let settings = SiteSettings {
            loading_phrases: vec!["only one".into()],
            ..SiteSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::LoadingPhrases { count: 1 })
        );
    }
}
