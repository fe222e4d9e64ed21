//! Transient preview handles for the selected image.
//!
//! A preview reference is display-only and distinct from the payload.
//! Handles are issued by a [`PreviewRegistry`] and must be released when
//! the image they describe is replaced or cleared.

use std::collections::HashSet;
use std::fmt;
use std::io::Cursor;

use image::ImageReader;
use uuid::Uuid;

use super::source::SourceImage;

/// What the UI shows for a previewed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSummary {
    pub name: String,
    pub media_type: String,
    pub byte_len: usize,
    /// Pixel size, when the bytes can be probed.
    pub dimensions: Option<(u32, u32)>,
}

/// Revocable handle to a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRef {
    id: Uuid,
    summary: PreviewSummary,
}

impl PreviewRef {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn summary(&self) -> &PreviewSummary {
        &self.summary
    }
}

impl fmt::Display for PreviewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preview:{}", self.id)
    }
}

/// Issues and revokes preview handles, tracking which are live.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: HashSet<Uuid>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preview handle for `image`.
    pub fn create(&mut self, image: &SourceImage) -> PreviewRef {
        let id = Uuid::new_v4();
        self.live.insert(id);

        let summary = PreviewSummary {
            name: image.name().to_string(),
            media_type: image.media_type().to_string(),
            byte_len: image.bytes().len(),
            dimensions: probe_dimensions(image.bytes()),
        };

        tracing::debug!(preview = %id, name = %summary.name, "Preview created");
        PreviewRef { id, summary }
    }

    /// Release a handle. Returns `false` if it was not live.
    pub fn release(&mut self, preview: &PreviewRef) -> bool {
        let released = self.live.remove(&preview.id);
        if released {
            tracing::debug!(preview = %preview.id, "Preview released");
        } else {
            tracing::warn!(preview = %preview.id, "Release of unknown preview handle");
        }
        released
    }

    pub fn is_live(&self, preview: &PreviewRef) -> bool {
        self.live.contains(&preview.id)
    }

    /// Number of handles created and not yet released.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// Read pixel dimensions from the header only; no full decode.
fn probe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}
