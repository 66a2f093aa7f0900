//! State for the location lifecycle.

use crate::mvi::MachineState;

/// Whether location updates are flowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Paused or never resumed. No subscription.
    #[default]
    Inactive,

    /// Resumed without permission; a request is outstanding.
    PermissionPending,

    /// Subscribed to the location provider.
    Active,
}

impl MachineState for LifecycleState {}

impl LifecycleState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inactive() {
        assert_eq!(LifecycleState::default(), LifecycleState::Inactive);
    }

    #[test]
    fn is_active_check() {
        assert!(!LifecycleState::Inactive.is_active());
        assert!(!LifecycleState::PermissionPending.is_active());
        assert!(LifecycleState::Active.is_active());
    }
}
