//! Location provider seam.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::config::{LocationConfig, LocationPriority};
use crate::location::position::Position;

/// Update cadence handed to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    pub interval: Duration,
    pub fastest_interval: Duration,
    pub priority: LocationPriority,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            fastest_interval: Duration::from_secs(5),
            priority: LocationPriority::HighAccuracy,
        }
    }
}

impl From<&LocationConfig> for LocationRequest {
    fn from(config: &LocationConfig) -> Self {
        Self {
            interval: config.interval(),
            fastest_interval: config.fastest_interval(),
            priority: config.priority,
        }
    }
}

/// Handle identifying one active subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission not granted")]
    PermissionDenied,

    #[error("Location provider unavailable: {0}")]
    Unavailable(String),
}

/// Push-based source of position fixes.
///
/// Implementations send fixes into `sink` until `remove_updates` is called
/// with the returned id or the sink is closed.
pub trait LocationProvider: Send + Sync {
    fn request_updates(
        &self,
        request: &LocationRequest,
        sink: mpsc::UnboundedSender<Position>,
    ) -> Result<SubscriptionId, LocationError>;

    fn remove_updates(&self, id: SubscriptionId);
}
