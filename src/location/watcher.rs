//! Wires accepted movement to fetches and notifications.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::fetch::FetchOrchestrator;
use crate::location::gate::{GateDecision, MovementGate};
use crate::location::position::Position;

/// Side effect fired once per accepted movement (haptic buzz on a phone).
pub trait MovementNotifier: Send + Sync {
    fn on_trigger(&self, position: &Position);
}

/// Feeds position updates through the gate, one at a time.
///
/// The gate lock is held for the whole of `handle_update`, including the
/// fetch trigger and the notifier call, so updates never interleave.
pub struct MovementWatcher {
    gate: Mutex<MovementGate>,
    orchestrator: FetchOrchestrator,
    notifier: Arc<dyn MovementNotifier>,
}

impl MovementWatcher {
    pub fn new(
        gate: MovementGate,
        orchestrator: FetchOrchestrator,
        notifier: Arc<dyn MovementNotifier>,
    ) -> Self {
        Self {
            gate: Mutex::new(gate),
            orchestrator,
            notifier,
        }
    }

    pub fn last_accepted(&self) -> Option<Position> {
        self.gate.lock().last_accepted().copied()
    }

    /// Process one update to completion. Must run inside a tokio runtime.
    pub fn handle_update(&self, update: Position) -> GateDecision {
        let mut gate = self.gate.lock();
        let decision = gate.evaluate(update);

        match decision {
            GateDecision::Discarded { distance_meters } => {
                tracing::trace!(
                    distance_meters,
                    threshold = gate.threshold_meters(),
                    "Movement below threshold"
                );
            }
            GateDecision::AcceptedFirst | GateDecision::Accepted { .. } => {
                tracing::info!(
                    latitude = update.latitude,
                    longitude = update.longitude,
                    ?decision,
                    "Movement accepted, fetching"
                );
                // Detached: pausing updates must not cancel the fetch.
                drop(self.orchestrator.fetch_random());
                self.notifier.on_trigger(&update);
            }
        }

        decision
    }

    /// Drain `updates` in arrival order until the sender side closes.
    pub async fn run(self: Arc<Self>, mut updates: mpsc::UnboundedReceiver<Position>) {
        while let Some(update) = updates.recv().await {
            self.handle_update(update);
        }
        tracing::debug!("Location update stream closed");
    }
}
