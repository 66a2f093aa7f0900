//! Location updates and the movement-triggered fetch path.
//!
//! ```text
//! LocationProvider ──Position──→ MovementWatcher ──→ MovementGate
//!                                      │ accepted
//!                                      ├──→ FetchOrchestrator::fetch_random()
//!                                      └──→ MovementNotifier::on_trigger()
//! ```

mod gate;
mod position;
mod provider;
mod track;
mod watcher;

pub use gate::{GateDecision, MovementGate, DEFAULT_MIN_DISPLACEMENT_METERS};
pub use position::{Coordinate, Position, EARTH_RADIUS_METERS};
pub use provider::{LocationError, LocationProvider, LocationRequest, SubscriptionId};
pub use track::{load_track, random_walk, TrackProvider};
pub use watcher::{MovementNotifier, MovementWatcher};
