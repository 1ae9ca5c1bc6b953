//! Reactive page state and the [`LandingView`] built on it.
//!
//! Components register the tabs, sections and buttons they render; the
//! controller writes through [`SignalView`] and the DOM follows the signals.

use landing_core::{ButtonId, CodeSample, LandingView, SectionId, SectionKind, SectionStyle};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the element the code samples are rendered into.
pub const CODE_PANEL_ID: &str = "code-content";

/// Label and background of one registered button.
#[derive(Clone, Copy)]
pub struct ButtonSignals {
    pub label: RwSignal<String>,
    pub background: RwSignal<Option<String>>,
}

#[derive(Clone, Copy)]
pub struct PageSignals {
    pub active_tab: RwSignal<String>,
    pub sample: RwSignal<Option<CodeSample>>,
    pub code_opacity: RwSignal<f64>,
    pub footer_year: RwSignal<Option<i32>>,
    pub hero_offset: RwSignal<f64>,
    pub hero_title: RwSignal<String>,
    sections: StoredValue<Vec<(SectionKind, RwSignal<String>)>>,
    buttons: StoredValue<Vec<ButtonSignals>>,
}

impl PageSignals {
    pub fn new(hero_title: &str) -> Self {
        Self {
            active_tab: RwSignal::new(String::new()),
            sample: RwSignal::new(None),
            code_opacity: RwSignal::new(1.0),
            footer_year: RwSignal::new(None),
            hero_offset: RwSignal::new(0.0),
            hero_title: RwSignal::new(hero_title.to_string()),
            sections: StoredValue::new(Vec::new()),
            buttons: StoredValue::new(Vec::new()),
        }
    }

    /// Register an animated section. Returns its id and inline style signal.
    pub fn register_section(&self, kind: SectionKind) -> (SectionId, RwSignal<String>) {
        let style = RwSignal::new(String::new());
        let mut id = SectionId(0);
        self.sections.update_value(|sections| {
            id = SectionId(sections.len());
            sections.push((kind, style));
        });
        (id, style)
    }

    /// Register a feedback button with its initial label.
    pub fn register_button(&self, label: &str) -> (ButtonId, ButtonSignals) {
        let button = ButtonSignals {
            label: RwSignal::new(label.to_string()),
            background: RwSignal::new(None),
        };
        let mut id = ButtonId(0);
        self.buttons.update_value(|buttons| {
            id = ButtonId(buttons.len());
            buttons.push(button);
        });
        (id, button)
    }

    fn button(&self, id: ButtonId) -> Option<ButtonSignals> {
        self.buttons.with_value(|buttons| buttons.get(id.0).copied())
    }
}

pub struct SignalView {
    signals: PageSignals,
}

impl SignalView {
    pub fn new(signals: PageSignals) -> Self {
        Self { signals }
    }
}

impl LandingView for SignalView {
    fn has_code_panel(&self) -> bool {
        document().get_element_by_id(CODE_PANEL_ID).is_some()
    }

    fn tab_ids(&self) -> Vec<String> {
        let Ok(nodes) = document().query_selector_all(".tab[data-tab]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(|el| el.get_attribute("data-tab"))
            .collect()
    }

    fn set_active_tab(&mut self, id: &str) {
        self.signals.active_tab.set(id.to_string());
    }

    fn show_sample(&mut self, sample: &CodeSample) {
        self.signals.sample.set(Some(*sample));
    }

    fn set_code_opacity(&mut self, opacity: f64) {
        self.signals.code_opacity.set(opacity);
    }

    fn sections(&self) -> Vec<(SectionId, SectionKind)> {
        self.signals.sections.with_value(|sections| {
            sections
                .iter()
                .enumerate()
                .map(|(i, (kind, _))| (SectionId(i), *kind))
                .collect()
        })
    }

    fn apply_section_style(&mut self, section: SectionId, style: &SectionStyle) {
        let css = style.css();
        self.signals.sections.with_value(|sections| {
            if let Some((_, signal)) = sections.get(section.0) {
                signal.set(css);
            }
        });
    }

    fn button_label(&self, button: ButtonId) -> Option<String> {
        self.signals.button(button).map(|b| b.label.get_untracked())
    }

    fn find_button(&self, label: &str) -> Option<ButtonId> {
        let label = label.trim();
        self.signals.buttons.with_value(|buttons| {
            buttons
                .iter()
                .position(|b| b.label.get_untracked().trim() == label)
                .map(ButtonId)
        })
    }

    fn set_button(&mut self, button: ButtonId, label: &str, background: Option<&str>) {
        if let Some(b) = self.signals.button(button) {
            b.label.set(label.to_string());
            b.background.set(background.map(str::to_string));
        }
    }

    fn set_footer_year(&mut self, year: i32) {
        self.signals.footer_year.set(Some(year));
    }

    fn set_hero_offset(&mut self, offset_px: f64) {
        self.signals.hero_offset.set(offset_px);
    }

    fn hero_title(&self) -> Option<String> {
        Some(self.signals.hero_title.get_untracked())
    }

    fn set_hero_title(&mut self, text: &str) {
        self.signals.hero_title.set(text.to_string());
    }
}
