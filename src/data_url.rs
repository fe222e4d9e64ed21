//! Self-contained `data:` image references.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// A displayable image reference that embeds its own bytes:
/// `data:<media type>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    media_type: String,
    payload: String,
}

impl DataUrl {
    /// Wrap an already base64-encoded payload verbatim.
    pub fn from_base64(media_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            payload: payload.into(),
        }
    }

    /// Encode raw bytes.
    pub fn from_bytes(media_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::from_base64(media_type, BASE64.encode(bytes))
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The base64 payload as stored.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Decode the payload back into bytes.
    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        Ok(BASE64.decode(self.payload.as_bytes())?)
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.media_type, self.payload)
    }
}
