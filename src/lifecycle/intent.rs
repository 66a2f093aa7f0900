//! Intents for the location lifecycle.

use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleIntent {
    /// Host came to the foreground. Carries the permission check result
    /// taken at dispatch time.
    Resume { permission_granted: bool },

    /// Host went to the background.
    Pause,
}

impl Intent for LifecycleIntent {}
