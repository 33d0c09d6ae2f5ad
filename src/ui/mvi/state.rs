//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are published as whole snapshots, so they must be cheap to
/// clone and comparable to skip redundant publishes. `Default` lets
/// owners move the state out with `std::mem::take` while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
