//! Error type shared by every controller operation.

use thiserror::Error;

/// Failures surfaced by the landing page controller.
#[derive(Debug, Error)]
pub enum LandingError {
    /// A tab name that is not part of the sample catalog.
    #[error("unknown tab '{0}'")]
    UnknownTab(String),

    /// No button carries the given label or id.
    #[error("unknown button '{0}'")]
    UnknownButton(String),

    /// A page element the controller needs was not rendered.
    #[error("missing page element: {0}")]
    MissingElement(&'static str),

    /// The embedded page configuration is not valid JSON for [`crate::LandingConfig`].
    #[error("invalid landing config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("landing controller already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, LandingError>;
