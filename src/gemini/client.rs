use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use std::time::{Duration, Instant};

use super::error::TransformError;
use super::prompt::build_instruction;
use super::types::{api_error_message, extract_image, GenerateContentRequest, GenerateContentResponse};
use super::ImageTransformer;
use crate::config::{GeminiConfig, SecureString};
use crate::data_url::DataUrl;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for Gemini's `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecureString>,
}

impl GeminiClient {
    /// Build a client. A missing key is allowed here; every call made
    /// without one fails with [`TransformError::MissingApiKey`].
    pub fn new(config: &GeminiConfig, api_key: Option<SecureString>) -> Result<Self, TransformError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(TransformError::Connection)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.trim().trim_start_matches("models/").to_string(),
            api_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full URL of the generation endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(
        &self,
        bytes: &[u8],
        media_type: &str,
        descriptor: &str,
    ) -> Result<DataUrl, TransformError> {
        let Some(api_key) = self.api_key.as_ref() else {
            return Err(TransformError::MissingApiKey);
        };

        let request = GenerateContentRequest::new(
            BASE64.encode(bytes),
            media_type,
            build_instruction(descriptor),
        );
        let url = self.endpoint();

        tracing::debug!(
            url = %url,
            model = %self.model,
            media_type = %media_type,
            source_bytes = bytes.len(),
            descriptor = %descriptor,
            "Sending generateContent request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(TransformError::Connection)?;

        let status = response.status();
        let body = response.text().await.map_err(TransformError::Connection)?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = api_error_message(&body);
            tracing::error!(
                status = %status,
                latency_ms,
                error = %message,
                "Gemini API error"
            );
            return Err(TransformError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| TransformError::Parse(format!("Failed to parse response JSON: {}", e)))?;

        let image = extract_image(&parsed).inspect_err(|_| {
            tracing::warn!(
                latency_ms,
                candidates = parsed.candidates.len(),
                finish_reason = ?parsed.candidates.first().and_then(|c| c.finish_reason.as_deref()),
                "Response carried no inline image"
            );
        })?;

        tracing::info!(
            latency_ms,
            payload_len = image.payload().len(),
            "Generated image received"
        );
        Ok(image)
    }
}

impl ImageTransformer for GeminiClient {
    async fn transform(
        &self,
        bytes: &[u8],
        media_type: &str,
        descriptor: &str,
    ) -> Result<DataUrl, TransformError> {
        self.generate(bytes, media_type, descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, model: &str) -> GeminiConfig {
        GeminiConfig {
            base_url: base_url.to_string(),
            model: model.to_string(),
            ..GeminiConfig::default()
        }
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = GeminiClient::new(&config("https://example.test/", "models/gemini-x"), None).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-x:generateContent"
        );
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = GeminiClient::new(&config("http://127.0.0.1:9", "m"), None).unwrap();
        let err = client.transform(b"x", "image/png", "anime").await.unwrap_err();
        assert!(matches!(err, TransformError::MissingApiKey));
    }
}
