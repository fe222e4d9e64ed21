//! Errors for transformation calls.

use thiserror::Error;

/// Shown when a failure carries no usable message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate cartoon. Please try again.";

/// Errors that can occur during a transformation call.
#[derive(Debug, Error)]
pub enum TransformError {
    /// No API key was configured; the call is never sent.
    #[error("API key is not configured. Set API_KEY in the environment.")]
    MissingApiKey,

    /// Request could not be sent or the response could not be read.
    #[error("Connection to Gemini failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Gemini answered with a non-success status.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON.
    #[error("Invalid response from Gemini: {0}")]
    Parse(String),

    /// Response had no candidate or no inline image part.
    #[error("No image data returned from Gemini.")]
    NoImageReturned,
}

impl TransformError {
    /// Message for the inline error banner.
    ///
    /// Falls back to [`GENERIC_FAILURE_MESSAGE`] when the underlying
    /// reason is empty.
    pub fn user_message(&self) -> String {
        match self {
            TransformError::Api { message, .. } if message.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            TransformError::Parse(message) if message.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }

    /// Short classification for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            TransformError::MissingApiKey => "missing_api_key",
            TransformError::Connection(_) => "connection_error",
            TransformError::Api { .. } => "api_error",
            TransformError::Parse(_) => "parse_error",
            TransformError::NoImageReturned => "no_image_returned",
        }
    }
}
