//! Reducer trait.

use super::intent::Intent;
use super::state::MachineState;

/// Transforms state based on intents.
///
/// The reducer is the only place where transitions happen. It performs no
/// I/O: the caller compares the old and new state and runs side effects.
pub trait Reducer {
    type State: MachineState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
