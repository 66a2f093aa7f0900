//! Simulated location provider replaying a waypoint track.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::location::position::{Coordinate, Position};
use crate::location::provider::{
    LocationError, LocationProvider, LocationRequest, SubscriptionId,
};

/// Emits one waypoint per `request.interval` until the track runs out.
///
/// The cursor survives unsubscribe, so a paused walk resumes at the next
/// waypoint rather than starting over.
pub struct TrackProvider {
    waypoints: Arc<Vec<Coordinate>>,
    cursor: Arc<AtomicUsize>,
    finished: Arc<AtomicBool>,
    finished_notify: Arc<Notify>,
    tasks: Mutex<HashMap<SubscriptionId, JoinHandle<()>>>,
}

impl TrackProvider {
    pub fn new(waypoints: Vec<Coordinate>) -> Self {
        Self {
            waypoints: Arc::new(waypoints),
            cursor: Arc::new(AtomicUsize::new(0)),
            finished: Arc::new(AtomicBool::new(false)),
            finished_notify: Arc::new(Notify::new()),
            tasks: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoints already emitted.
    pub fn emitted(&self) -> usize {
        self.cursor.load(Ordering::SeqCst).min(self.waypoints.len())
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    pub fn active_subscriptions(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Resolves once the last waypoint has been emitted.
    pub async fn wait_finished(&self) {
        // Register before checking the flag so a concurrent finish is not lost.
        let notified = self.finished_notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_finished() {
            return;
        }
        notified.await;
    }
}

impl LocationProvider for TrackProvider {
    fn request_updates(
        &self,
        request: &LocationRequest,
        sink: mpsc::UnboundedSender<Position>,
    ) -> Result<SubscriptionId, LocationError> {
        if self.waypoints.is_empty() {
            return Err(LocationError::Unavailable("track has no waypoints".to_string()));
        }

        if request.interval.is_zero() {
            return Err(LocationError::Unavailable(
                "update interval must be non-zero".to_string(),
            ));
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| LocationError::Unavailable(format!("no async runtime: {}", e)))?;

        let id = SubscriptionId::new();
        let waypoints = Arc::clone(&self.waypoints);
        let cursor = Arc::clone(&self.cursor);
        let finished = Arc::clone(&self.finished);
        let finished_notify = Arc::clone(&self.finished_notify);
        let interval = request.interval;

        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let idx = cursor.load(Ordering::SeqCst);
                let Some(waypoint) = waypoints.get(idx).copied() else {
                    finished.store(true, Ordering::SeqCst);
                    finished_notify.notify_waiters();
                    break;
                };

                if sink.send(Position::at(waypoint, SystemTime::now())).is_err() {
                    break;
                }
                cursor.store(idx + 1, Ordering::SeqCst);

                if idx + 1 == waypoints.len() {
                    finished.store(true, Ordering::SeqCst);
                    finished_notify.notify_waiters();
                    break;
                }
            }
        });

        tracing::debug!(subscription = %id, interval_ms = interval.as_millis() as u64, "Track updates requested");
        self.tasks.lock().insert(id, task);
        Ok(id)
    }

    fn remove_updates(&self, id: SubscriptionId) {
        if let Some(task) = self.tasks.lock().remove(&id) {
            task.abort();
            tracing::debug!(subscription = %id, "Track updates removed");
        }
    }
}

impl Drop for TrackProvider {
    fn drop(&mut self) {
        for (_, task) in self.tasks.lock().drain() {
            task.abort();
        }
    }
}

/// Load a JSON array of `{"latitude": .., "longitude": ..}` objects.
pub fn load_track(path: &Path) -> Result<Vec<Coordinate>, LocationError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LocationError::Unavailable(format!("failed to read track '{}': {}", path.display(), e))
    })?;

    let waypoints: Vec<Coordinate> = serde_json::from_str(&content).map_err(|e| {
        LocationError::Unavailable(format!("failed to parse track '{}': {}", path.display(), e))
    })?;

    if waypoints.is_empty() {
        return Err(LocationError::Unavailable(format!(
            "track '{}' has no waypoints",
            path.display()
        )));
    }

    Ok(waypoints)
}

/// Generate `steps` waypoints after `start`, each `step_meters` away from
/// the previous one in a random direction.
pub fn random_walk<R: Rng>(
    start: Coordinate,
    steps: usize,
    step_meters: f64,
    rng: &mut R,
) -> Vec<Coordinate> {
    let mut waypoints = Vec::with_capacity(steps + 1);
    let mut current = start;
    waypoints.push(current);

    for _ in 0..steps {
        let bearing = rng.gen_range(0.0..360.0);
        current = current.offset(step_meters, bearing);
        waypoints.push(current);
    }

    waypoints
}
