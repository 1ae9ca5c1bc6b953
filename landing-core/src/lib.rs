//! # landing-core
//!
//! Behaviour of the CodePlatform landing page, independent of the browser.
//!
//! - [`rotation`] - code tabs that rotate on a timer and pause on manual selection
//! - [`animation`] - one-way entrance animations for sections scrolled into view
//! - [`feedback`] - temporary "clicked" label on buttons
//! - [`effects`] - optional hero parallax and typing effects
//!
//! The page is reached only through two seams: [`LandingView`] for the
//! document and [`Scheduler`] for timers. The browser crate backs them with
//! Leptos signals and `window` timers; [`VirtualScheduler`] and
//! `testing::RecordingView` (behind the `testing` feature) run the same
//! controller headlessly.
//!
//! ```ignore
//! use std::time::Duration;
//! use landing_core::{LandingConfig, LandingController, VirtualScheduler};
//! use landing_core::testing::RecordingView;
//!
//! let mut page = LandingController::new(
//!     RecordingView::landing_page(),
//!     VirtualScheduler::new(),
//!     LandingConfig::default(),
//! );
//! page.init(2025).unwrap();
//! page.advance(Duration::from_secs(3));
//! assert_eq!(page.current_tab().id, "python");
//! ```
//!
//! ---
//!
//! Developed with 💀 by The CodePlatform Team (c)2025

pub mod animation;
pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod feedback;
pub mod rotation;
pub mod samples;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod timer;
pub mod view;

pub use config::LandingConfig;
pub use controller::LandingController;
pub use error::{LandingError, Result};
pub use rotation::RotationState;
pub use samples::{CodeSample, SampleCatalog};
pub use timer::{Scheduler, Tick, TimerId, VirtualScheduler};
pub use view::{ButtonId, LandingView, SectionId, SectionKind, SectionStyle};
