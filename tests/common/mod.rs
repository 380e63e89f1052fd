//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_gateway;

use std::sync::Arc;

use pagefeed::controller::ListEventReceiver;
use pagefeed::{ListController, ListEvent};

pub use mock_gateway::{page_of, Call, MockGateway, Scripted, PER_PAGE};

/// Controller plus its gateway and an event subscription.
pub struct Harness {
    pub controller: ListController,
    pub gateway: Arc<MockGateway>,
    pub events: ListEventReceiver,
}

/// Build a controller over `gateway` without processing the first page.
pub fn harness(gateway: MockGateway) -> Harness {
    let gateway = Arc::new(gateway);
    let mut controller = ListController::new(gateway.clone());
    let events = controller.subscribe();
    Harness {
        controller,
        gateway,
        events,
    }
}

/// Build a controller with default mock answers and settle the first page.
pub async fn loaded_harness() -> Harness {
    let mut harness = harness(MockGateway::new(200));
    harness.controller.settle().await;
    drain(&mut harness.events);
    harness
}

/// Collect every event already delivered.
pub fn drain(events: &mut ListEventReceiver) -> Vec<ListEvent> {
    let mut collected = Vec::new();
    while let Ok(event) = events.try_recv() {
        collected.push(event);
    }
    collected
}

/// Scroll to the last loaded row.
pub fn scroll_to_end(controller: &mut ListController) {
    if let Some(last) = controller.items().len().checked_sub(1) {
        controller.notify_row_visible(last);
    }
}

/// Yield until the gateway has recorded `count` calls, so that spawned
/// requests have picked up their scripted answers.
pub async fn wait_for_calls(gateway: &MockGateway, count: usize) {
    while gateway.calls().await.len() < count {
        tokio::task::yield_now().await;
    }
}
