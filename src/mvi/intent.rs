//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user input (filter selection, scrolling, taps)
/// or the successful outcome of a gateway call.
pub trait Intent: Send + 'static {}
