//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, picker choices)
/// - System events (conversion outcomes)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
