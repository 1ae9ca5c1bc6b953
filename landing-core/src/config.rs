//! Page configuration.
//!
//! The page may embed a JSON object in
//! `<script id="landing-config" type="application/json">`. Every field is
//! optional; anything left out falls back to the defaults below.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub timing: TimingConfig,
    pub animation: AnimationConfig,
    pub feedback: FeedbackConfig,
    pub effects: EffectsConfig,
    /// `EnvFilter` directive for the browser log subscriber.
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            animation: AnimationConfig::default(),
            feedback: FeedbackConfig::default(),
            effects: EffectsConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Timer periods and delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Interval between automatic tab advances.
    pub rotation_period_ms: u64,
    /// Grace period after a manual tab selection before rotation restarts.
    pub resume_delay_ms: u64,
    /// Delay before the code panel fades back in after a switch.
    pub fade_delay_ms: u64,
    /// How long a clicked button shows its confirmation label.
    pub feedback_ms: u64,
    /// Interval between revealed characters of the hero typing effect.
    pub typing_step_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            rotation_period_ms: 3000,
            resume_delay_ms: 5000,
            fade_delay_ms: 100,
            feedback_ms: 2000,
            typing_step_ms: 100,
        }
    }
}

impl TimingConfig {
    pub fn rotation_period(&self) -> Duration {
        Duration::from_millis(self.rotation_period_ms)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }

    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }

    pub fn feedback(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }

    pub fn typing_step(&self) -> Duration {
        Duration::from_millis(self.typing_step_ms)
    }
}

/// Entrance animation parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Fraction of a section that must be visible before it animates in.
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport when testing visibility.
    pub root_margin_bottom_px: f64,
    /// Vertical offset of a section while it is still hidden.
    pub offset_px: f64,
    pub card_duration_s: f64,
    /// Extra delay per feature card, multiplied by the card's index.
    pub card_stagger_s: f64,
    pub section_duration_s: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom_px: 50.0,
            offset_px: 20.0,
            card_duration_s: 0.6,
            card_stagger_s: 0.1,
            section_duration_s: 0.8,
        }
    }
}

impl AnimationConfig {
    /// `rootMargin` string for an `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", crate::animation::format_number(self.root_margin_bottom_px))
    }
}

/// Button confirmation label and highlight.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub label: String,
    pub color: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            label: "✓ Clicked!".to_string(),
            color: "#10b981".to_string(),
        }
    }
}

/// Optional hero effects. Both are off unless the page opts in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub parallax: bool,
    pub typing: bool,
    /// Hero offset per scrolled pixel.
    pub parallax_rate: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax: false,
            typing: false,
            parallax_rate: -0.5,
        }
    }
}

impl LandingConfig {
    /// Parse config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse config if present, falling back to defaults when it is absent,
    /// blank or invalid.
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(str::trim) {
            None | Some("") => Self::default(),
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!("[landing][config] {e}; using defaults");
                    Self::default()
                }
            },
        }
    }
}
