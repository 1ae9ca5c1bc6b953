// Landing page sections
// Developed with 💀 by The CodePlatform Team (c)2025

/// Product name used across the landing page (single source of truth)
pub const BRAND: &str = "CodePlatform";

mod button;
mod code_window;
mod cta;
mod features;
mod footer;
mod hero;
mod nav;

pub use button::FeedbackButton;
pub use code_window::CodeWindow;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::{HERO_TITLE, Hero};
pub use nav::{Nav, NavLink};
