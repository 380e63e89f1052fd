//! Events published by the list controller.

use tokio::sync::mpsc;

use crate::gateway::TransportError;

/// Notifications for the presentation layer.
///
/// Events carry no state; consumers re-read it from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A page was applied (replaced or appended).
    ItemsUpdated,
    /// A gateway call failed. State is unchanged.
    Error(TransportError),
    /// A like call succeeded; carries the new flag.
    LikeChanged(bool),
    /// A purchase call succeeded.
    PurchaseSucceeded,
}

/// Receiving side handed to observers. Dropping it unsubscribes.
pub type ListEventReceiver = mpsc::UnboundedReceiver<ListEvent>;

/// Fan-out of [`ListEvent`]s to any number of observers.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::UnboundedSender<ListEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> ListEventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber, pruning closed ones.
    pub fn emit(&mut self, event: ListEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
