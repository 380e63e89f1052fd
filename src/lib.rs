//! Paginated, filterable item list with latest-wins page loading.
//!
//! - [`gateway`]: asynchronous source of pages and action acknowledgements
//! - [`list`]: list state and its pure reducer
//! - [`controller`]: single-writer owner of the state that drives the gateway
//! - [`config`], [`logging`]: ambient setup for the binary

pub mod config;
pub mod controller;
pub mod gateway;
pub mod list;
pub mod logging;
pub mod model;
pub mod mvi;

pub use controller::{ListController, ListEvent};
pub use gateway::{FetchGateway, SimulatedGateway, TransportError};
pub use model::{Acknowledgement, Filter, Item, Page};
