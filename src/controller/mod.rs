//! List state controller.
//!
//! Owns the [`ListState`](crate::list::ListState), turns user input into
//! reducer intents, issues gateway calls, and publishes [`ListEvent`]s.

mod events;
mod list_controller;
mod slot;

pub use events::{EventBus, ListEvent, ListEventReceiver};
pub use list_controller::ListController;
