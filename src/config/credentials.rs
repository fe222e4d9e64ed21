//! Credential resolution from the environment and configuration.
//!
//! This module provides secure handling of the Gemini API key
//! resolved at startup.

use super::types::GeminiConfig;

/// Environment variables consulted for the API key, in priority order.
pub const API_KEY_ENV_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of API key resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    pub fn key(&self) -> Option<&SecureString> {
        match self {
            CredentialStatus::Configured(key) => Some(key),
            CredentialStatus::Unconfigured { .. } => None,
        }
    }
}

/// Resolve the API key: environment first, then the config file.
///
/// `lookup` abstracts `std::env::var` so resolution can be tested
/// without touching the process environment.
pub fn resolve_api_key<F>(config: &GeminiConfig, lookup: F) -> CredentialStatus
where
    F: Fn(&str) -> Option<String>,
{
    for var in API_KEY_ENV_VARS {
        if let Some(value) = lookup(var) {
            let value = value.trim().to_string();
            if !value.is_empty() {
                return CredentialStatus::Configured(SecureString::new(value));
            }
        }
    }

    if let Some(ref key) = config.api_key {
        if !key.trim().is_empty() {
            return CredentialStatus::Configured(SecureString::new(key.trim().to_string()));
        }
    }

    CredentialStatus::Unconfigured {
        reason: format!(
            "{} is missing from environment variables and gemini.api_key is not set",
            API_KEY_ENV_VARS[0]
        ),
    }
}
