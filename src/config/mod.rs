//! Configuration: the optional TOML file plus credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{resolve_api_key, CredentialStatus, SecureString, API_KEY_ENV_VARS};
pub use loader::ConfigError;
pub use types::{Config, DownloadConfig, GeminiConfig, UiConfig};
