//! Base trait for machine state.

/// Marker trait for state snapshots.
///
/// Snapshots are cheap to clone, comparable so callers can detect a
/// transition, and have a well-defined initial value.
pub trait MachineState: Clone + PartialEq + Default + Send + 'static {}
