//! The page surface the controller drives.
//!
//! The browser crate implements [`LandingView`] on top of Leptos signals;
//! `testing::RecordingView` (feature `testing`) implements it in memory.

use crate::samples::CodeSample;

/// Handle for a button registered with the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub usize);

/// Handle for a section tracked by the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub usize);

/// Which kind of block a section is. Feature cards get staggered delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    FeatureCard,
    CallToAction,
    Footer,
}

/// Inline style of an animated section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStyle {
    pub opacity: f64,
    pub offset_px: f64,
    pub transition: String,
}

impl SectionStyle {
    /// Render as an inline `style` attribute value.
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); transition: {};",
            crate::animation::format_number(self.opacity),
            crate::animation::format_number(self.offset_px),
            self.transition
        )
    }

    pub fn is_visible(&self) -> bool {
        self.opacity >= 1.0 && self.offset_px == 0.0
    }
}

pub trait LandingView {
    /// Whether the code panel (`#code-content`) is present.
    fn has_code_panel(&self) -> bool;

    /// `data-tab` keys of the rendered tab controls, in page order.
    fn tab_ids(&self) -> Vec<String>;

    /// Mark exactly the tab with `id` active and clear every other marker.
    fn set_active_tab(&mut self, id: &str);

    /// Replace the code panel's text and style class.
    fn show_sample(&mut self, sample: &CodeSample);

    fn set_code_opacity(&mut self, opacity: f64);

    /// Sections to animate, in page order.
    fn sections(&self) -> Vec<(SectionId, SectionKind)>;

    fn apply_section_style(&mut self, section: SectionId, style: &SectionStyle);

    fn button_label(&self, button: ButtonId) -> Option<String>;

    /// First button whose current label equals `label` (whitespace-trimmed).
    fn find_button(&self, label: &str) -> Option<ButtonId>;

    /// Set a button's label and background. `None` clears the background.
    fn set_button(&mut self, button: ButtonId, label: &str, background: Option<&str>);

    fn set_footer_year(&mut self, year: i32);

    fn set_hero_offset(&mut self, _offset_px: f64) {}

    fn hero_title(&self) -> Option<String> {
        None
    }

    fn set_hero_title(&mut self, _text: &str) {}
}
