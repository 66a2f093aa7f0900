//! Reducer for the location lifecycle.

use crate::mvi::Reducer;

use super::intent::LifecycleIntent;
use super::state::LifecycleState;

/// Pure transitions. Subscribing, unsubscribing and asking for permission
/// are done by [`LifecycleBinding`](super::LifecycleBinding) around the
/// dispatch.
pub struct LifecycleReducer;

impl Reducer for LifecycleReducer {
    type State = LifecycleState;
    type Intent = LifecycleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LifecycleIntent::Resume { permission_granted } => match state {
                // Already subscribed: resume is idempotent
                LifecycleState::Active => LifecycleState::Active,
                _ if permission_granted => LifecycleState::Active,
                _ => LifecycleState::PermissionPending,
            },

            LifecycleIntent::Pause => LifecycleState::Inactive,
        }
    }
}
