//! Error types for the recoverable paths: sprite loading, form validation and
//! configuration parsing. None of these are fatal to the page.

/// Errors produced while fetching the icon sprite.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpriteError {
    /// The server answered with a non-success status.
    #[error("sprite request to {path} failed: status {status}")]
    Status { path: String, status: u16 },

    /// The request or body read failed before a status was available.
    #[error("sprite request to {path} failed: {message}")]
    Network { path: String, message: String },

    /// Every candidate path was tried and none succeeded.
    #[error("could not load SVG sprite from any path ({attempts} tried)")]
    Exhausted { attempts: usize },
}

/// Contact form validation failures, in the order they are checked.
///
/// The `Display` text is what the visitor sees in the error notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Site configuration could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("site config parse failed: {0}")]
    Parse(String),
}
