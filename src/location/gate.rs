//! Displacement filter over location updates.

use crate::location::position::Position;

/// Default displacement needed to accept a new position.
pub const DEFAULT_MIN_DISPLACEMENT_METERS: f64 = 10.0;

/// Absorbs floating-point error in the haversine computation.
const DISTANCE_TOLERANCE_METERS: f64 = 1e-6;

/// What the gate did with an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateDecision {
    /// First update ever seen.
    AcceptedFirst,
    /// Moved at least the threshold since the last accepted position.
    Accepted { distance_meters: f64 },
    /// Too close to the last accepted position.
    Discarded { distance_meters: f64 },
}

impl GateDecision {
    pub fn is_trigger(&self) -> bool {
        !matches!(self, GateDecision::Discarded { .. })
    }
}

/// Keeps the last accepted position and filters by distance from it.
///
/// The last accepted position is replaced, never merged.
#[derive(Debug, Clone)]
pub struct MovementGate {
    threshold_meters: f64,
    last_accepted: Option<Position>,
}

impl MovementGate {
    pub fn new(threshold_meters: f64) -> Self {
        Self {
            threshold_meters,
            last_accepted: None,
        }
    }

    pub fn threshold_meters(&self) -> f64 {
        self.threshold_meters
    }

    pub fn last_accepted(&self) -> Option<&Position> {
        self.last_accepted.as_ref()
    }

    pub fn evaluate(&mut self, update: Position) -> GateDecision {
        let Some(last) = self.last_accepted else {
            self.last_accepted = Some(update);
            return GateDecision::AcceptedFirst;
        };

        let distance_meters = update.distance_to(&last);
        if distance_meters + DISTANCE_TOLERANCE_METERS >= self.threshold_meters {
            self.last_accepted = Some(update);
            GateDecision::Accepted { distance_meters }
        } else {
            GateDecision::Discarded { distance_meters }
        }
    }
}

impl Default for MovementGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DISPLACEMENT_METERS)
    }
}
