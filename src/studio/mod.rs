//! Session orchestration: the single writer of the central state.
//!
//! State transitions live in [`StudioReducer`]; [`Studio`] owns the state
//! plus the resources the reducer must not touch (preview handles, request
//! tokens) and is the only thing that dispatches intents.

mod intent;
mod reducer;
mod state;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::data_url::DataUrl;
use crate::download::{save_result, DownloadError};
use crate::gemini::{ImageTransformer, TransformError};
use crate::intake::{IntakeError, PreviewRegistry, SourceImage};
use crate::mvi::Reducer;

pub use intent::StudioIntent;
pub use reducer::StudioReducer;
pub use state::{LoadedSource, Phase, RequestState, StudioState, TicketId};

/// Everything needed to run one transformation call, snapshotted at
/// submission time.
#[derive(Debug, Clone)]
pub struct GenerateTicket {
    id: TicketId,
    image: Arc<SourceImage>,
    descriptor: String,
}

impl GenerateTicket {
    pub fn id(&self) -> TicketId {
        self.id
    }

    /// Run the call. Does not touch the studio; hand the outcome to
    /// [`Studio::settle`].
    pub async fn run<T: ImageTransformer>(&self, transformer: &T) -> Result<DataUrl, TransformError> {
        transformer
            .transform(self.image.bytes(), self.image.media_type(), &self.descriptor)
            .await
    }
}

/// What happened to a settled call's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Outcome written to the state.
    Applied,
    /// Source changed while the call was outstanding; outcome dropped.
    Stale,
    /// Not the outstanding call.
    Ignored,
}

pub struct Studio {
    state: StudioState,
    previews: PreviewRegistry,
    next_token: u64,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

impl Studio {
    pub fn new() -> Self {
        Self {
            state: StudioState::default(),
            previews: PreviewRegistry::new(),
            next_token: 1,
        }
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    fn dispatch(&mut self, intent: StudioIntent) {
        self.state = StudioReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Release the current preview handle, if any.
    fn release_preview(&mut self) {
        if let Some(preview) = self.state.source.as_ref().map(|s| s.preview.clone()) {
            self.previews.release(&preview);
        }
    }

    /// Pick a file from disk.
    ///
    /// On rejection the error is shown and the current image is kept.
    pub fn select_file(&mut self, path: &Path) -> Result<(), IntakeError> {
        match SourceImage::from_path(path) {
            Ok(image) => {
                self.select_image(image);
                Ok(())
            }
            Err(err) => {
                self.reject(&err);
                Err(err)
            }
        }
    }

    /// Install an already-validated image as the source.
    pub fn select_image(&mut self, image: SourceImage) {
        self.release_preview();
        let preview = self.previews.create(&image);
        tracing::info!(
            name = %image.name(),
            media_type = %image.media_type(),
            bytes = image.bytes().len(),
            preview = %preview,
            "Source image selected"
        );
        self.dispatch(StudioIntent::SourceAccepted {
            image: Arc::new(image),
            preview,
        });
    }

    /// Show an intake failure without touching the current image.
    pub fn reject(&mut self, err: &IntakeError) {
        tracing::warn!(error = %err, "File rejected");
        self.dispatch(StudioIntent::SourceRejected {
            message: err.to_string(),
        });
    }

    /// Drop the source image, its preview, the result and any error.
    ///
    /// Allowed while a call is outstanding; the call is not cancelled.
    pub fn clear(&mut self) {
        self.release_preview();
        self.dispatch(StudioIntent::Cleared);
    }

    pub fn select_preset(&mut self, index: usize) {
        self.dispatch(StudioIntent::PresetSelected(index));
    }

    pub fn set_custom_style(&mut self, text: impl Into<String>) {
        self.dispatch(StudioIntent::CustomStyleChanged(text.into()));
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(StudioIntent::ErrorDismissed);
    }

    pub fn can_generate(&self) -> bool {
        self.state.can_generate()
    }

    /// Enter `Pending` and snapshot what the call needs.
    ///
    /// Returns `None` when generate is unavailable (no source, or a call
    /// already outstanding).
    pub fn begin_generate(&mut self) -> Option<GenerateTicket> {
        if !self.state.can_generate() {
            return None;
        }
        let source = self.state.source.as_ref()?;

        let id = TicketId {
            token: self.next_token,
            source_generation: self.state.source_generation,
        };
        self.next_token = self.next_token.wrapping_add(1);

        let ticket = GenerateTicket {
            id,
            image: Arc::clone(&source.image),
            descriptor: self.state.style.effective().to_string(),
        };

        tracing::info!(
            token = id.token,
            descriptor = %ticket.descriptor,
            "Transformation started"
        );
        self.dispatch(StudioIntent::GenerateStarted { ticket: id });
        Some(ticket)
    }

    /// Apply the outcome of a call started with [`Studio::begin_generate`].
    pub fn settle(&mut self, id: TicketId, outcome: Result<DataUrl, TransformError>) -> Settlement {
        if self.state.in_flight != Some(id) {
            tracing::debug!(token = id.token, "Ignoring outcome of unknown call");
            return Settlement::Ignored;
        }

        let stale = id.source_generation != self.state.source_generation;
        let intent = match outcome {
            Ok(image) => StudioIntent::GenerateSucceeded { ticket: id, image },
            Err(err) => {
                if !stale {
                    tracing::error!(
                        token = id.token,
                        error_type = err.error_type(),
                        error = %err,
                        "Transformation failed"
                    );
                }
                StudioIntent::GenerateFailed {
                    ticket: id,
                    message: err.user_message(),
                }
            }
        };
        self.dispatch(intent);

        if stale {
            tracing::warn!(token = id.token, "Dropped result for a replaced or cleared image");
            Settlement::Stale
        } else {
            Settlement::Applied
        }
    }

    /// Begin, run and settle one call. `None` if generate is unavailable.
    pub async fn generate_with<T: ImageTransformer>(&mut self, transformer: &T) -> Option<Settlement> {
        let ticket = self.begin_generate()?;
        let outcome = ticket.run(transformer).await;
        Some(self.settle(ticket.id(), outcome))
    }

    /// Write the current result into `dir`.
    pub fn download(&self, dir: &Path, now: SystemTime) -> Result<PathBuf, DownloadError> {
        let image = self.state.result.as_ref().ok_or(DownloadError::NoResult)?;
        save_result(dir, image, now)
    }
}
