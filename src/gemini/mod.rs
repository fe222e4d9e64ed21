//! Transformation client for Gemini's image generation API.
//!
//! One `generateContent` call per transformation: the source image goes
//! out as inline base64 data next to a synthesized instruction, and the
//! first inline image in the first candidate comes back as a data URL.
//! No retries and no request timeout; callers retry by calling again.

mod client;
mod error;
mod prompt;
mod types;

use std::future::Future;

use crate::data_url::DataUrl;

pub use client::GeminiClient;
pub use error::{TransformError, GENERIC_FAILURE_MESSAGE};
pub use prompt::build_instruction;
pub use types::{
    extract_image, Candidate, Content, GenerateContentRequest, GenerateContentResponse,
    InlineData, Part, RESULT_MEDIA_TYPE,
};

/// Something that can stylize an image.
///
/// [`GeminiClient`] is the production implementation; tests and the
/// studio accept any implementor.
pub trait ImageTransformer: Send + Sync {
    fn transform(
        &self,
        bytes: &[u8],
        media_type: &str,
        descriptor: &str,
    ) -> impl Future<Output = Result<DataUrl, TransformError>> + Send;
}
