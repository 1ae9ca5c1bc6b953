//! Entrance animations for feature cards, the CTA block and the footer.
//!
//! Sections start hidden (transparent, pushed down) and flip to visible the
//! first time enough of them is on screen. The flip is one-way.

use tracing::debug;

use crate::config::AnimationConfig;
use crate::view::{LandingView, SectionId, SectionKind, SectionStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSection {
    pub id: SectionId,
    pub kind: SectionKind,
    /// Position among feature cards; drives the stagger. Zero for other kinds.
    pub delay_index: usize,
    pub entered: bool,
}

#[derive(Debug)]
pub struct EntranceAnimator {
    config: AnimationConfig,
    sections: Vec<AnimatedSection>,
}

impl EntranceAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            sections: Vec::new(),
        }
    }

    /// Start tracking a section and apply its hidden style.
    /// Tracking the same id twice is a no-op.
    pub fn track(&mut self, id: SectionId, kind: SectionKind, view: &mut impl LandingView) {
        if self.section(id).is_some() {
            return;
        }
        let delay_index = match kind {
            SectionKind::FeatureCard => self
                .sections
                .iter()
                .filter(|s| s.kind == SectionKind::FeatureCard)
                .count(),
            _ => 0,
        };
        let section = AnimatedSection {
            id,
            kind,
            delay_index,
            entered: false,
        };
        view.apply_section_style(id, &self.style(&section));
        self.sections.push(section);
    }

    /// Feed an intersection ratio for a section. Returns `true` only on the
    /// call that makes the section visible.
    pub fn observe(&mut self, id: SectionId, ratio: f64, view: &mut impl LandingView) -> bool {
        if !crosses_threshold(ratio, self.config.threshold) {
            return false;
        }
        self.reveal(id, view)
    }

    /// Mark a section visible without a ratio check. Returns `true` only the
    /// first time.
    pub fn reveal(&mut self, id: SectionId, view: &mut impl LandingView) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return false;
        };
        if self.sections[index].entered {
            return false;
        }
        self.sections[index].entered = true;
        let style = self.style(&self.sections[index]);
        view.apply_section_style(id, &style);
        debug!("[landing][animate] section {} entered", id.0);
        true
    }

    pub fn section(&self, id: SectionId) -> Option<&AnimatedSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn sections(&self) -> &[AnimatedSection] {
        &self.sections
    }

    pub fn is_entered(&self, id: SectionId) -> bool {
        self.section(id).is_some_and(|s| s.entered)
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Style for a section's current state.
    pub fn style(&self, section: &AnimatedSection) -> SectionStyle {
        let transition = match section.kind {
            SectionKind::FeatureCard => {
                let duration = format_number(self.config.card_duration_s);
                let delay = format_number(section.delay_index as f64 * self.config.card_stagger_s);
                format!("opacity {duration}s ease {delay}s, transform {duration}s ease {delay}s")
            }
            SectionKind::CallToAction | SectionKind::Footer => {
                let duration = format_number(self.config.section_duration_s);
                format!("opacity {duration}s ease, transform {duration}s ease")
            }
        };
        if section.entered {
            SectionStyle {
                opacity: 1.0,
                offset_px: 0.0,
                transition,
            }
        } else {
            SectionStyle {
                opacity: 0.0,
                offset_px: self.config.offset_px,
                transition,
            }
        }
    }
}

fn crosses_threshold(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}

/// Element box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

/// Fraction of `rect` inside a viewport whose bottom edge is pulled up by
/// `margin_bottom` pixels.
pub fn intersection_ratio(rect: Rect, viewport_height: f64, margin_bottom: f64) -> f64 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let root_bottom = (viewport_height - margin_bottom).max(0.0);
    let visible_top = rect.top.max(0.0);
    let visible_bottom = (rect.top + rect.height).min(root_bottom);
    ((visible_bottom - visible_top).max(0.0) / rect.height).min(1.0)
}

/// Compact decimal for CSS: `0.1`, `0`, `0.6`, `20`. Rounded to milliseconds.
pub(crate) fn format_number(value: f64) -> String {
    let rounded = format!("{value:.3}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
