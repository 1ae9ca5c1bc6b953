//! In-memory [`LandingView`] for driving the controller without a browser.

use std::collections::BTreeMap;

use crate::samples::CodeSample;
use crate::view::{ButtonId, LandingView, SectionId, SectionKind, SectionStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedButton {
    pub label: String,
    pub background: Option<String>,
}

/// Records every mutation the controller makes.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub code_panel: bool,
    /// Tab keys in page order.
    pub tabs: Vec<String>,
    /// Tabs currently carrying the active marker.
    pub active_tabs: Vec<String>,
    pub code_text: String,
    pub code_class: String,
    pub code_opacity: f64,
    /// Every sample id shown, in order.
    pub shown: Vec<String>,
    pub section_kinds: Vec<SectionKind>,
    pub section_styles: BTreeMap<SectionId, SectionStyle>,
    pub buttons: Vec<RecordedButton>,
    pub footer_year: Option<i32>,
    pub hero_offset: f64,
    pub hero_title: Option<String>,
}

impl RecordingView {
    /// Empty page: no code panel, no tabs, nothing to animate.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock landing page: three code tabs, three feature cards, a CTA,
    /// a footer and two buttons.
    pub fn landing_page() -> Self {
        Self {
            code_panel: true,
            tabs: vec!["java".into(), "python".into(), "cpp".into()],
            code_opacity: 1.0,
            section_kinds: vec![
                SectionKind::FeatureCard,
                SectionKind::FeatureCard,
                SectionKind::FeatureCard,
                SectionKind::CallToAction,
                SectionKind::Footer,
            ],
            buttons: ["Start", "Learn More"]
                .into_iter()
                .map(|label| RecordedButton {
                    label: label.to_string(),
                    background: None,
                })
                .collect(),
            hero_title: Some("Learn to Code".to_string()),
            ..Self::default()
        }
    }

    pub fn section_style(&self, id: SectionId) -> Option<&SectionStyle> {
        self.section_styles.get(&id)
    }
}

impl LandingView for RecordingView {
    fn has_code_panel(&self) -> bool {
        self.code_panel
    }

    fn tab_ids(&self) -> Vec<String> {
        self.tabs.clone()
    }

    fn set_active_tab(&mut self, id: &str) {
        self.active_tabs = self.tabs.iter().filter(|t| *t == id).cloned().collect();
    }

    fn show_sample(&mut self, sample: &CodeSample) {
        self.code_text = sample.code.to_string();
        self.code_class = sample.style_class.to_string();
        self.shown.push(sample.id.to_string());
    }

    fn set_code_opacity(&mut self, opacity: f64) {
        self.code_opacity = opacity;
    }

    fn sections(&self) -> Vec<(SectionId, SectionKind)> {
        self.section_kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| (SectionId(i), *kind))
            .collect()
    }

    fn apply_section_style(&mut self, section: SectionId, style: &SectionStyle) {
        self.section_styles.insert(section, style.clone());
    }

    fn button_label(&self, button: ButtonId) -> Option<String> {
        self.buttons.get(button.0).map(|b| b.label.clone())
    }

    fn find_button(&self, label: &str) -> Option<ButtonId> {
        self.buttons
            .iter()
            .position(|b| b.label.trim() == label.trim())
            .map(ButtonId)
    }

    fn set_button(&mut self, button: ButtonId, label: &str, background: Option<&str>) {
        if let Some(b) = self.buttons.get_mut(button.0) {
            b.label = label.to_string();
            b.background = background.map(str::to_string);
        }
    }

    fn set_footer_year(&mut self, year: i32) {
        self.footer_year = Some(year);
    }

    fn set_hero_offset(&mut self, offset_px: f64) {
        self.hero_offset = offset_px;
    }

    fn hero_title(&self) -> Option<String> {
        self.hero_title.clone()
    }

    fn set_hero_title(&mut self, text: &str) {
        self.hero_title = Some(text.to_string());
    }
}
