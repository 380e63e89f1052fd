//! Core trait for item sources.

use async_trait::async_trait;

use super::error::TransportError;
use crate::model::{Acknowledgement, Filter, Page};

/// Asynchronous source of pages and action acknowledgements.
///
/// The controller only ever holds an `Arc<dyn FetchGateway>` and spawns
/// each call on the runtime, so implementations must be `Send + Sync`.
#[async_trait]
pub trait FetchGateway: Send + Sync {
    /// Returns the name of this gateway for logging.
    fn name(&self) -> &'static str;

    /// Fetch one page of items for `filter`.
    ///
    /// `page` is 1-based. The returned [`Page::next_page`] is the cursor
    /// the controller will request when the user scrolls to the end.
    async fn fetch_items(&self, page: u32, filter: Filter) -> Result<Page, TransportError>;

    /// Purchase the current item.
    async fn purchase(&self) -> Result<Acknowledgement, TransportError>;

    /// Like the current item.
    async fn like(&self) -> Result<Acknowledgement, TransportError>;
}
