//! Starts and stops location updates with the host lifecycle.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::lifecycle::intent::LifecycleIntent;
use crate::lifecycle::permission::PermissionGate;
use crate::lifecycle::reducer::LifecycleReducer;
use crate::lifecycle::state::LifecycleState;
use crate::location::{LocationError, LocationProvider, LocationRequest, MovementWatcher, SubscriptionId};
use crate::mvi::Reducer;

struct ActiveSubscription {
    id: SubscriptionId,
    pump: JoinHandle<()>,
}

/// Owns the single location subscription for a session.
///
/// Transitions come from [`LifecycleReducer`]; this type performs the side
/// effects the transition implies. Stopping updates never cancels a fetch
/// that is already running.
pub struct LifecycleBinding {
    state: LifecycleState,
    provider: Arc<dyn LocationProvider>,
    permission: Arc<dyn PermissionGate>,
    watcher: Arc<MovementWatcher>,
    request: LocationRequest,
    active: Option<ActiveSubscription>,
}

impl LifecycleBinding {
    pub fn new(
        provider: Arc<dyn LocationProvider>,
        permission: Arc<dyn PermissionGate>,
        watcher: Arc<MovementWatcher>,
        request: LocationRequest,
    ) -> Self {
        Self {
            state: LifecycleState::default(),
            provider,
            permission,
            watcher,
            request,
            active: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn watcher(&self) -> &Arc<MovementWatcher> {
        &self.watcher
    }

    /// Host resumed. Subscribes if permission is granted, otherwise asks
    /// for it. Calling again while active does nothing.
    ///
    /// Must be called inside a tokio runtime. On provider failure the
    /// binding stays inactive.
    pub fn resume(&mut self) -> Result<LifecycleState, LocationError> {
        let permission_granted = self.permission.is_granted();
        let old = self.state;
        let new = LifecycleReducer::reduce(old, LifecycleIntent::Resume { permission_granted });

        match new {
            LifecycleState::Active if !old.is_active() => {
                if let Err(err) = self.subscribe() {
                    tracing::warn!(error = %err, "Failed to start location updates");
                    self.state = LifecycleState::Inactive;
                    return Err(err);
                }
            }
            LifecycleState::PermissionPending => self.permission.request(),
            _ => {}
        }

        if old != new {
            tracing::info!(from = ?old, to = ?new, "Lifecycle transition");
        }
        self.state = new;
        Ok(new)
    }

    /// Wait until the provider closes the update stream and every update
    /// it delivered has gone through the watcher.
    ///
    /// Only returns for providers that end on their own, such as a finished
    /// track. Does nothing when not subscribed.
    pub async fn drain(&mut self) {
        if let Some(active) = self.active.as_mut() {
            if let Err(err) = (&mut active.pump).await {
                tracing::warn!(error = %err, "Location pump ended abnormally");
            }
        }
    }

    /// Host paused. Stops future triggers; in-flight fetches still publish.
    pub fn pause(&mut self) -> LifecycleState {
        let old = self.state;
        let new = LifecycleReducer::reduce(old, LifecycleIntent::Pause);

        self.unsubscribe();

        if old != new {
            tracing::info!(from = ?old, to = ?new, "Lifecycle transition");
        }
        self.state = new;
        new
    }

    fn subscribe(&mut self) -> Result<(), LocationError> {
        if self.active.is_some() {
            return Ok(());
        }

        let (sink, updates) = mpsc::unbounded_channel();
        let id = self.provider.request_updates(&self.request, sink)?;
        let pump = tokio::spawn(Arc::clone(&self.watcher).run(updates));

        tracing::debug!(subscription = %id, "Location updates started");
        self.active = Some(ActiveSubscription { id, pump });
        Ok(())
    }

    fn unsubscribe(&mut self) {
        if let Some(active) = self.active.take() {
            self.provider.remove_updates(active.id);
            active.pump.abort();
            tracing::debug!(subscription = %active.id, "Location updates stopped");
        }
    }
}

impl Drop for LifecycleBinding {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
