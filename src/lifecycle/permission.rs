//! Permission subsystem seam.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Location permission check and request.
///
/// `request` is fire-and-forget; the answer arrives out of band and is
/// picked up by the next `is_granted` call.
pub trait PermissionGate: Send + Sync {
    fn is_granted(&self) -> bool;
    fn request(&self);
}

/// Permission fixed at construction, flippable at runtime.
#[derive(Debug, Default)]
pub struct StaticPermission {
    granted: AtomicBool,
    requests: AtomicUsize,
}

impl StaticPermission {
    pub fn new(granted: bool) -> Self {
        Self {
            granted: AtomicBool::new(granted),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn set_granted(&self, granted: bool) {
        self.granted.store(granted, Ordering::SeqCst);
    }

    /// Number of times `request` was called.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl PermissionGate for StaticPermission {
    fn is_granted(&self) -> bool {
        self.granted.load(Ordering::SeqCst)
    }

    fn request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
        tracing::info!("Location permission requested");
    }
}
