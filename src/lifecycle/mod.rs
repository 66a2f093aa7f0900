//! Lifecycle binding for location updates.
//!
//! Uses MVI:
//! - `state.rs` - Inactive / PermissionPending / Active
//! - `intent.rs` - Resume and Pause callbacks
//! - `reducer.rs` - pure transitions
//! - `binding.rs` - runs subscribe/unsubscribe/permission side effects
//!   around each dispatch

mod binding;
mod intent;
mod permission;
mod reducer;
mod state;

pub use binding::LifecycleBinding;
pub use intent::LifecycleIntent;
pub use permission::{PermissionGate, StaticPermission};
pub use reducer::LifecycleReducer;
pub use state::LifecycleState;
