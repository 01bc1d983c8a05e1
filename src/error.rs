//! Error types for Honeytrap.
//!
//! Malformed inbound input is never an error here: the pipeline coerces
//! it to safe defaults. These types cover the concerns that can actually
//! fail, configuration and outbound reporting.

/// Top-level error type for the honeypot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Escalation reporting errors. These are logged and dropped; a failed
/// report must never surface on the inbound response path.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report request failed: {0}")]
    RequestFailed(String),

    #[error("Report endpoint returned status {status}")]
    BadStatus { status: u16 },
}

/// Result type alias for the honeypot.
pub type Result<T> = std::result::Result<T, Error>;
