//! Landing controller behaviour on a virtual clock.

use std::time::Duration;

use pretty_assertions::assert_eq;

use super::LandingController;
use crate::config::LandingConfig;
use crate::error::LandingError;
use crate::testing::RecordingView;
use crate::timer::VirtualScheduler;
use crate::view::{ButtonId, SectionId};

type Page = LandingController<RecordingView, VirtualScheduler>;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn page_with(config: LandingConfig) -> Page {
    let mut page = LandingController::new(RecordingView::landing_page(), VirtualScheduler::new(), config);
    page.init(2025).expect("stock page initializes");
    page
}

fn page() -> Page {
    page_with(LandingConfig::default())
}

#[test]
fn init_paints_first_sample_and_starts_rotating() {
    let page = page();
    let view = page.view();
    assert_eq!(page.current_tab().id, "java");
    assert_eq!(view.active_tabs, vec!["java"]);
    assert_eq!(view.code_class, "code-java");
    assert_eq!(view.code_opacity, 1.0);
    assert_eq!(view.footer_year, Some(2025));
    assert!(page.is_rotating());
}

#[test]
fn rotation_is_strictly_circular() {
    let mut page = page();
    for _ in 0..7 {
        page.advance(ms(3000));
    }
    assert_eq!(
        page.view().shown,
        vec!["java", "python", "cpp", "java", "python", "cpp", "java", "python"]
    );
}

#[test]
fn every_switch_leaves_exactly_one_active_tab() {
    let mut page = page();
    for id in ["cpp", "java", "python"] {
        page.switch_tab(id).unwrap();
        let view = page.view();
        assert_eq!(view.active_tabs, vec![id]);
        assert_eq!(view.code_class, format!("code-{id}"));
        assert_eq!(view.code_text, page.current_tab().code);
    }
}

#[test]
fn switch_fades_code_back_in() {
    let mut page = page();
    page.switch_tab("python").unwrap();
    assert_eq!(page.view().code_opacity, 0.0);
    page.advance(ms(99));
    assert_eq!(page.view().code_opacity, 0.0);
    page.advance(ms(1));
    assert_eq!(page.view().code_opacity, 1.0);
}

#[test]
fn manual_switch_pauses_for_grace_period() {
    let mut page = page();
    page.advance(ms(1000));
    page.switch_tab("cpp").unwrap();
    assert!(!page.is_rotating());
    assert!(page.resume_pending());

    // No tick inside the grace period.
    page.advance(ms(4999));
    assert_eq!(page.current_tab().id, "cpp");
    assert!(!page.is_rotating());

    // Rotation restarts at 5s and the first tick lands one period later.
    page.advance(ms(1));
    assert!(page.is_rotating());
    page.advance(ms(2999));
    assert_eq!(page.current_tab().id, "cpp");
    page.advance(ms(1));
    assert_eq!(page.current_tab().id, "java");
    assert_eq!(page.view().shown, vec!["java", "cpp", "java"]);
}

#[test]
fn second_manual_switch_extends_grace_period() {
    let mut page = page();
    page.switch_tab("python").unwrap();
    page.advance(ms(3000));
    page.switch_tab("cpp").unwrap();
    page.advance(ms(4999));
    assert!(!page.is_rotating());
    page.advance(ms(1));
    assert!(page.is_rotating());
    assert_eq!(page.scheduler().pending(), 1);
}

#[test]
fn unknown_tab_is_rejected_without_side_effects() {
    let mut page = page();
    let err = page.switch_tab("rust").unwrap_err();
    assert!(matches!(err, LandingError::UnknownTab(ref id) if id == "rust"));
    assert_eq!(page.current_tab().id, "java");
    assert_eq!(page.view().shown, vec!["java"]);
    assert!(page.is_rotating());
}

#[test]
fn hiding_page_stops_rotation_and_showing_restarts_it() {
    let mut page = page();
    page.advance(ms(2000));
    page.set_page_hidden(true);
    assert!(!page.is_rotating());
    page.advance(ms(10_000));
    assert_eq!(page.view().shown, vec!["java"]);

    page.set_page_hidden(false);
    page.advance(ms(2999));
    assert_eq!(page.view().shown, vec!["java"]);
    page.advance(ms(1));
    assert_eq!(page.view().shown, vec!["java", "python"]);
}

#[test]
fn repeated_visible_events_never_double_tick() {
    let mut page = page();
    page.set_page_hidden(false);
    page.set_page_hidden(false);
    page.advance(ms(3000));
    assert_eq!(page.view().shown, vec!["java", "python"]);
}

#[test]
fn visibility_before_init_does_not_rotate() {
    let mut page: Page =
        LandingController::new(RecordingView::landing_page(), VirtualScheduler::new(), LandingConfig::default());
    page.set_page_hidden(true);
    page.set_page_hidden(false);
    assert!(!page.is_rotating());
    page.advance(ms(10_000));
    assert!(page.view().shown.is_empty());
    assert_eq!(page.scheduler().pending(), 0);

    page.init(2025).unwrap();
    assert!(page.is_rotating());
    assert_eq!(page.view().shown, vec!["java"]);
}

#[test]
fn hiding_during_grace_period_drops_pending_restart() {
    let mut page = page();
    page.switch_tab("python").unwrap();
    page.set_page_hidden(true);
    assert!(!page.resume_pending());
    page.advance(ms(20_000));
    assert!(!page.is_rotating());
    assert_eq!(page.current_tab().id, "python");
}

#[test]
fn button_feedback_reverts_after_two_seconds() {
    let mut page = page();
    page.click_button_labeled("Start").unwrap();
    let buttons = &page.view().buttons;
    assert_eq!(buttons[0].label, "✓ Clicked!");
    assert_eq!(buttons[0].background.as_deref(), Some("#10b981"));
    assert_eq!(buttons[1].label, "Learn More");
    assert_eq!(buttons[1].background, None);

    page.advance(ms(1999));
    assert_eq!(page.view().buttons[0].label, "✓ Clicked!");
    page.advance(ms(1));
    assert_eq!(page.view().buttons[0].label, "Start");
    assert_eq!(page.view().buttons[0].background, None);
    assert!(!page.is_feedback_active(ButtonId(0)));
}

#[test]
fn reclick_restarts_window_and_keeps_original_label() {
    let mut page = page();
    page.handle_button_click(ButtonId(0)).unwrap();
    page.advance(ms(1500));
    page.handle_button_click(ButtonId(0)).unwrap();
    page.advance(ms(1999));
    assert_eq!(page.view().buttons[0].label, "✓ Clicked!");
    page.advance(ms(1));
    assert_eq!(page.view().buttons[0].label, "Start");
}

#[test]
fn reclick_by_label_restarts_window() {
    let mut page = page();
    page.click_button_labeled("Start").unwrap();
    page.advance(ms(1000));
    assert_eq!(page.view().buttons[0].label, "✓ Clicked!");
    page.click_button_labeled("Start").unwrap();
    page.advance(ms(1999));
    assert_eq!(page.view().buttons[0].label, "✓ Clicked!");
    assert_eq!(page.view().buttons[1].label, "Learn More");
    page.advance(ms(1));
    assert_eq!(page.view().buttons[0].label, "Start");
    assert!(!page.is_feedback_active(ButtonId(0)));
}

#[test]
fn unknown_button_label_is_rejected() {
    let mut page = page();
    let err = page.click_button_labeled("Buy now").unwrap_err();
    assert!(matches!(err, LandingError::UnknownButton(ref l) if l == "Buy now"));
}

#[test]
fn sections_stay_visible_once_entered() {
    let mut page = page();
    let card = SectionId(1);
    assert!(!page.view().section_style(card).unwrap().is_visible());
    assert!(page.on_section_visibility(card, 0.4));
    assert!(!page.on_section_visibility(card, 0.0));
    assert!(page.is_section_entered(card));
    assert!(page.view().section_style(card).unwrap().is_visible());
    assert!(!page.is_section_entered(SectionId(0)));
}

#[test]
fn observer_reveal_is_one_way() {
    let mut page = page();
    let footer = SectionId(4);
    assert!(page.on_section_intersecting(footer));
    assert!(!page.on_section_intersecting(footer));
    assert!(!page.on_section_visibility(footer, 0.0));
    assert!(page.view().section_style(footer).unwrap().is_visible());
}

#[test]
fn init_fails_on_missing_code_panel() {
    let mut page = LandingController::new(RecordingView::empty(), VirtualScheduler::new(), LandingConfig::default());
    let err = page.init(2025).unwrap_err();
    assert!(matches!(err, LandingError::MissingElement(_)));
    assert_eq!(page.view().footer_year, None);
    assert!(!page.is_rotating());
}

#[test]
fn init_fails_on_missing_tabs() {
    let view = RecordingView {
        tabs: Vec::new(),
        ..RecordingView::landing_page()
    };
    let mut page = LandingController::new(view, VirtualScheduler::new(), LandingConfig::default());
    assert!(matches!(page.init(2025), Err(LandingError::MissingElement(_))));
}

#[test]
fn init_rejects_tab_without_sample() {
    let mut view = RecordingView::landing_page();
    view.tabs.push("rust".into());
    let mut page = LandingController::new(view, VirtualScheduler::new(), LandingConfig::default());
    assert!(matches!(page.init(2025), Err(LandingError::UnknownTab(ref id)) if id == "rust"));
}

#[test]
fn init_fails_on_missing_tab_control() {
    let view = RecordingView {
        tabs: vec!["java".into(), "python".into()],
        ..RecordingView::landing_page()
    };
    let mut page = LandingController::new(view, VirtualScheduler::new(), LandingConfig::default());
    assert!(matches!(page.init(2025), Err(LandingError::MissingElement(_))));
    assert!(!page.is_initialized());
    assert!(!page.is_rotating());
    assert_eq!(page.view().footer_year, None);
    assert!(page.view().shown.is_empty());
}

#[test]
fn init_twice_is_an_error() {
    let mut page = page();
    assert!(matches!(page.init(2026), Err(LandingError::AlreadyInitialized)));
    assert_eq!(page.view().footer_year, Some(2025));
}

#[test]
fn typing_effect_runs_when_enabled() {
    let mut config = LandingConfig::default();
    config.effects.typing = true;
    let mut page = page_with(config);
    assert_eq!(page.view().hero_title.as_deref(), Some(""));
    page.advance(ms(100));
    assert_eq!(page.view().hero_title.as_deref(), Some("L"));
    page.advance(ms(1200));
    assert_eq!(page.view().hero_title.as_deref(), Some("Learn to Code"));
}

#[test]
fn parallax_only_applies_when_enabled() {
    let mut page = page();
    page.on_scroll(300.0);
    assert_eq!(page.view().hero_offset, 0.0);

    let mut config = LandingConfig::default();
    config.effects.parallax = true;
    let mut page = page_with(config);
    page.on_scroll(300.0);
    assert_eq!(page.view().hero_offset, -150.0);
}

#[test]
fn stop_and_start_rotation_by_hand() {
    let mut page = page();
    page.stop_rotation();
    page.stop_rotation();
    page.advance(ms(9000));
    assert_eq!(page.current_tab().id, "java");
    page.start_rotation();
    page.advance(ms(3000));
    assert_eq!(page.current_tab().id, "python");
}
