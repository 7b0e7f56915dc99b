/// Marker for state values driven by a [`Reducer`](super::Reducer).
///
/// `Default` is the initial state; `PartialEq` lets callers detect whether
/// an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
