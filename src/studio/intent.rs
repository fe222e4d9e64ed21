use std::sync::Arc;

use super::state::TicketId;
use crate::data_url::DataUrl;
use crate::intake::{PreviewRef, SourceImage};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StudioIntent {
    /// A valid image was picked and a preview issued for it.
    SourceAccepted {
        image: Arc<SourceImage>,
        preview: PreviewRef,
    },
    /// The picked file was refused; the current image stays.
    SourceRejected { message: String },
    /// User cleared the source image.
    Cleared,
    PresetSelected(usize),
    CustomStyleChanged(String),
    /// A transformation call was issued.
    GenerateStarted { ticket: TicketId },
    GenerateSucceeded { ticket: TicketId, image: DataUrl },
    GenerateFailed { ticket: TicketId, message: String },
    /// User dismissed the inline error.
    ErrorDismissed,
}

impl Intent for StudioIntent {}
