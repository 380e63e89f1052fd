//! Fetch gateway: the asynchronous source of pages and action results.
//!
//! The list controller never talks to a transport directly. It is handed
//! an `Arc<dyn FetchGateway>` at construction, which lets tests swap in
//! scripted doubles and lets the binary use [`SimulatedGateway`].

mod error;
mod simulated;
mod traits;

pub use error::TransportError;
pub use simulated::SimulatedGateway;
pub use traits::FetchGateway;
