//! Central state of a cartoonify session.

use std::sync::Arc;

use crate::data_url::DataUrl;
use crate::intake::{PreviewRef, SourceImage};
use crate::mvi::UiState;
use crate::style::StyleSelection;

/// Identifies one transformation call.
///
/// `source_generation` records which selected image the call was made
/// for, so a response arriving after the image changed can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketId {
    pub token: u64,
    pub source_generation: u64,
}

/// The selected image and its preview handle.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSource {
    pub image: Arc<SourceImage>,
    pub preview: PreviewRef,
}

/// Lifecycle of the most recent transformation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// Coarse phase, derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No source image; generate unavailable.
    Idle,
    /// Source present, nothing outstanding.
    Ready,
    /// A call is outstanding; generate disabled.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudioState {
    pub source: Option<LoadedSource>,
    pub style: StyleSelection,
    pub result: Option<DataUrl>,
    pub request: RequestState,
    /// Inline error banner.
    pub error: Option<String>,
    /// Bumped on every accepted selection and every clear.
    pub source_generation: u64,
    /// The call currently awaited, if any.
    pub in_flight: Option<TicketId>,
}

impl UiState for StudioState {}

impl StudioState {
    pub fn is_pending(&self) -> bool {
        self.request == RequestState::Pending
    }

    pub fn can_generate(&self) -> bool {
        self.source.is_some() && !self.is_pending()
    }

    pub fn phase(&self) -> Phase {
        if self.is_pending() {
            Phase::Pending
        } else if self.source.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn preview(&self) -> Option<&PreviewRef> {
        self.source.as_ref().map(|s| &s.preview)
    }
}
