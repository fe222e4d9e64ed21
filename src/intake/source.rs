use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::media::{is_image_media_type, media_type_for_path};

/// User-visible message shown when a non-image file is picked.
pub const INVALID_IMAGE_MESSAGE: &str = "Please select a valid image file (JPEG, PNG, WebP).";

/// Errors raised while accepting a file.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The declared media type is not in the image category.
    #[error("Please select a valid image file (JPEG, PNG, WebP).")]
    NotAnImage { media_type: String },

    /// The file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The user's original file: payload plus declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    name: String,
    bytes: Vec<u8>,
    media_type: String,
}

impl SourceImage {
    /// Accept an in-memory file, validating its declared type.
    pub fn new(
        name: impl Into<String>,
        bytes: Vec<u8>,
        media_type: impl Into<String>,
    ) -> Result<Self, IntakeError> {
        let media_type = media_type.into();
        if !is_image_media_type(&media_type) {
            return Err(IntakeError::NotAnImage { media_type });
        }
        Ok(Self {
            name: name.into(),
            bytes,
            media_type,
        })
    }

    /// Accept a file from disk.
    ///
    /// The type check runs before the read so a rejected file is never
    /// loaded into memory.
    pub fn from_path(path: &Path) -> Result<Self, IntakeError> {
        let media_type = media_type_for_path(path);
        if !is_image_media_type(media_type) {
            return Err(IntakeError::NotAnImage {
                media_type: media_type.to_string(),
            });
        }

        let bytes = fs::read(path).map_err(|e| IntakeError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::new(name, bytes, media_type)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}
