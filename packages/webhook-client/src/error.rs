//! Error types for the webhook client.

use thiserror::Error;

/// Result type for webhook operations.
pub type Result<T> = std::result::Result<T, WebhookError>;

/// Webhook client errors.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Required form field was blank
    #[error("Please enter a {field}.")]
    Input { field: &'static str },

    /// Required setting missing or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (DNS, connection refused, timeout)
    #[error("Network error calling webhook: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Webhook returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// 2xx response whose body is not JSON
    #[error("Webhook did not return JSON: {body}")]
    Decode { body: String },
}

impl WebhookError {
    /// True for errors caused by what the user typed.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }

    /// True for errors that mean the server is missing settings.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
