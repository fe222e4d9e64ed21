//! Wire format for `models/{model}:generateContent`.

use serde::{Deserialize, Serialize};

use super::error::TransformError;
use crate::data_url::DataUrl;

/// Media type stamped on returned images.
pub const RESULT_MEDIA_TYPE: &str = "image/png";

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content segment: text, inline binary data, or something else
/// this client ignores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, alias = "inline_data", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, alias = "mime_type")]
    pub mime_type: String,
    /// Base64 payload.
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl GenerateContentRequest {
    /// Image part first, instruction second.
    pub fn new(image_base64: String, media_type: &str, instruction: String) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: media_type.to_string(),
                            data: image_base64,
                        }),
                    },
                    Part {
                        text: Some(instruction),
                        inline_data: None,
                    },
                ],
            }],
        }
    }
}

/// Pick the generated image out of a response.
///
/// Only the first candidate is considered; its parts are scanned in
/// order and the first one with non-empty inline data wins. The payload
/// is wrapped verbatim as a PNG data URL.
pub fn extract_image(response: &GenerateContentResponse) -> Result<DataUrl, TransformError> {
    let candidate = response
        .candidates
        .first()
        .ok_or(TransformError::NoImageReturned)?;

    let parts = candidate
        .content
        .as_ref()
        .map(|c| c.parts.as_slice())
        .unwrap_or_default();

    parts
        .iter()
        .filter_map(|part| part.inline_data.as_ref())
        .find(|inline| !inline.data.is_empty())
        .map(|inline| DataUrl::from_base64(RESULT_MEDIA_TYPE, inline.data.clone()))
        .ok_or(TransformError::NoImageReturned)
}

/// Best human-readable reason from an error response body.
pub(crate) fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}
