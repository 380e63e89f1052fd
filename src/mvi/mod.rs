//! Model-View-Intent primitives for the list screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Observers
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: owned snapshot of everything the screen renders
//! - **Intent**: user input or a completed gateway call
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
