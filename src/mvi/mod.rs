//! Model-View-Intent (MVI) primitives for state machines.
//!
//! Unidirectional flow used by the lifecycle binding:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ side effects (caller)
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a machine
//! - **Intent**: platform or user event
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::MachineState;
