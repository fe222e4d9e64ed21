//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (file picks, preset clicks, typing)
/// - System events (transformation responses)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
