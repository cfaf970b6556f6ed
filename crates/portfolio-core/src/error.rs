//! Error types for the portfolio page behaviors

use thiserror::Error;

/// Main error type for page behavior operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// One or more required form fields were empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Email address did not match `local@domain.tld`
    #[error("Malformed email address: {0}")]
    MalformedEmail(String),

    /// Booking date/time could not be parsed as a local date-time
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Booking date/time lies before the current moment
    #[error("Date/time is in the past: {0}")]
    PastDateTime(String),

    /// Lightbox id is not part of the registry
    #[error("Lightbox not found: {0}")]
    LightboxNotFound(String),

    /// Persistent storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Mail draft could not be handed to the mail handler
    #[error("Mail hand-off failed: {0}")]
    MailHandoff(String),

    /// Site configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
