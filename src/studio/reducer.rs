use crate::mvi::Reducer;

use super::intent::StudioIntent;
use super::state::{LoadedSource, RequestState, StudioState};

/// Reducer for session state transitions.
pub struct StudioReducer;

impl Reducer for StudioReducer {
    type State = StudioState;
    type Intent = StudioIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StudioIntent::SourceAccepted { image, preview } => StudioState {
                source: Some(LoadedSource { image, preview }),
                result: None,
                error: None,
                request: settle_idle(state.request),
                source_generation: state.source_generation.wrapping_add(1),
                ..state
            },

            StudioIntent::SourceRejected { message } => StudioState {
                error: Some(message),
                ..state
            },

            StudioIntent::Cleared => StudioState {
                source: None,
                result: None,
                error: None,
                request: settle_idle(state.request),
                source_generation: state.source_generation.wrapping_add(1),
                ..state
            },

            StudioIntent::PresetSelected(index) => {
                let mut style = state.style;
                style.select_preset(index);
                StudioState { style, ..state }
            }

            StudioIntent::CustomStyleChanged(text) => {
                let mut style = state.style;
                style.set_custom(text);
                StudioState { style, ..state }
            }

            StudioIntent::GenerateStarted { ticket } => {
                if !state.can_generate() {
                    return state;
                }
                StudioState {
                    request: RequestState::Pending,
                    in_flight: Some(ticket),
                    error: None,
                    ..state
                }
            }

            StudioIntent::GenerateSucceeded { ticket, image } => {
                if state.in_flight != Some(ticket) {
                    return state;
                }
                if ticket.source_generation != state.source_generation {
                    return drop_stale(state);
                }
                StudioState {
                    result: Some(image),
                    error: None,
                    request: RequestState::Succeeded,
                    in_flight: None,
                    ..state
                }
            }

            StudioIntent::GenerateFailed { ticket, message } => {
                if state.in_flight != Some(ticket) {
                    return state;
                }
                if ticket.source_generation != state.source_generation {
                    return drop_stale(state);
                }
                StudioState {
                    error: Some(message.clone()),
                    request: RequestState::Failed(message),
                    in_flight: None,
                    ..state
                }
            }

            StudioIntent::ErrorDismissed => StudioState {
                error: None,
                request: match state.request {
                    RequestState::Failed(_) => RequestState::Idle,
                    other => other,
                },
                ..state
            },
        }
    }
}

/// A new source resets the request outcome, but an outstanding call
/// keeps generate disabled until it settles.
fn settle_idle(request: RequestState) -> RequestState {
    match request {
        RequestState::Pending => RequestState::Pending,
        _ => RequestState::Idle,
    }
}

/// The call was made for an image that is no longer selected.
fn drop_stale(state: StudioState) -> StudioState {
    StudioState {
        request: RequestState::Idle,
        in_flight: None,
        ..state
    }
}
