//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are lifecycle callbacks (resume, pause) or user commands.
/// Reducers consume them to produce the next state.
pub trait Intent: Send + 'static {}
