//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_gemini;

use bananatoon::config::{GeminiConfig, SecureString};
use bananatoon::data_url::DataUrl;
use bananatoon::gemini::{GeminiClient, ImageTransformer, TransformError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

pub const TEST_MODEL: &str = "gemini-2.5-flash-image";

pub fn gemini_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        base_url: base_url.to_string(),
        model: TEST_MODEL.to_string(),
        api_key: None,
        connect_timeout_seconds: 2,
    }
}

/// Client pointed at `base_url` with a test key.
pub fn client_for(base_url: &str) -> GeminiClient {
    GeminiClient::new(
        &gemini_config(base_url),
        Some(SecureString::new("test-key".to_string())),
    )
    .expect("client builds")
}

/// Write a file into `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

/// One recorded call to [`FakeTransformer`].
#[derive(Debug, Clone)]
pub struct FakeCall {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub descriptor: String,
}

/// In-process transformer returning queued outcomes.
#[derive(Default)]
pub struct FakeTransformer {
    calls: Mutex<Vec<FakeCall>>,
    outcomes: Mutex<VecDeque<Result<DataUrl, TransformError>>>,
}

impl FakeTransformer {
    pub fn returning(outcome: Result<DataUrl, TransformError>) -> Self {
        let fake = Self::default();
        fake.outcomes.lock().push_back(outcome);
        fake
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().clone()
    }
}

impl ImageTransformer for FakeTransformer {
    async fn transform(
        &self,
        bytes: &[u8],
        media_type: &str,
        descriptor: &str,
    ) -> Result<DataUrl, TransformError> {
        self.calls.lock().push(FakeCall {
            bytes: bytes.to_vec(),
            media_type: media_type.to_string(),
            descriptor: descriptor.to_string(),
        });
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or(Err(TransformError::NoImageReturned))
    }
}
