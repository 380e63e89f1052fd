//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States are cloned to hand out read-only snapshots and compared to
/// detect which side effects a transition requires.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
