//! Image intake: media type validation, source images and preview handles.

mod media;
mod preview;
mod source;

pub use media::{is_image_media_type, media_type_for_path, FALLBACK_MEDIA_TYPE};
pub use preview::{PreviewRef, PreviewRegistry, PreviewSummary};
pub use source::{IntakeError, SourceImage, INVALID_IMAGE_MESSAGE};
