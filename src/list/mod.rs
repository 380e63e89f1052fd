//! Paginated list feature module.
//!
//! Uses the MVI pattern:
//! - `state.rs` - list state, paging gate, load lifecycle
//! - `intent.rs` - user input and successful gateway results
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{ListState, PageLoad, PageRequest, INITIAL_PAGE};
