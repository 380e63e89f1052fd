//! Owner of the list state and the gateway requests that feed it.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::events::{EventBus, ListEvent, ListEventReceiver};
use super::slot::RequestSlot;
use crate::gateway::{FetchGateway, TransportError};
use crate::list::{ListIntent, ListReducer, ListState, PageLoad};
use crate::model::{Acknowledgement, Filter, Item, Page};
use crate::mvi::Reducer;

/// Result of a gateway call, tagged with the generation of its request.
#[derive(Debug)]
enum Completion {
    Page {
        generation: u64,
        result: Result<Page, TransportError>,
    },
    Purchase {
        generation: u64,
        result: Result<Acknowledgement, TransportError>,
    },
    Like {
        generation: u64,
        result: Result<Acknowledgement, TransportError>,
    },
}

/// Single-writer controller for the paginated list.
///
/// All mutation happens through `&mut self`. Gateway calls run as spawned
/// Tokio tasks and report back through an internal channel; their results
/// are folded into the state only when the owner calls
/// [`process_next`](Self::process_next), [`drain_completed`](Self::drain_completed)
/// or [`settle`](Self::settle).
///
/// Each stream (pages, purchases, likes) is latest-wins: a new request
/// aborts the previous one of the same kind and stale results are dropped.
pub struct ListController {
    state: ListState,
    page_load: PageLoad,
    gateway: Arc<dyn FetchGateway>,
    events: EventBus,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    page_slot: RequestSlot,
    purchase_slot: RequestSlot,
    like_slot: RequestSlot,
}

impl ListController {
    /// Create a controller on the default filter and request the first page.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn new(gateway: Arc<dyn FetchGateway>) -> Self {
        Self::with_filter(gateway, Filter::default())
    }

    /// Create a controller starting on `filter` and request the first page.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn with_filter(gateway: Arc<dyn FetchGateway>, filter: Filter) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            state: ListState::with_filter(filter),
            page_load: PageLoad::Idle,
            gateway,
            events: EventBus::new(),
            completion_tx,
            completion_rx,
            page_slot: RequestSlot::default(),
            purchase_slot: RequestSlot::default(),
            like_slot: RequestSlot::default(),
        };
        controller.request_page();
        controller
    }

    /// Register an observer. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> ListEventReceiver {
        self.events.subscribe()
    }

    // -- Input ---------------------------------------------------------------

    /// Select a filter. A different filter restarts paging from page 1.
    pub fn set_filter(&mut self, filter: Filter) {
        self.dispatch(ListIntent::FilterSelected(filter));
    }

    /// Report that `row` scrolled into view.
    ///
    /// Advances to the next page only for the last loaded row and only when
    /// a fresh cursor is available.
    pub fn notify_row_visible(&mut self, row: usize) {
        self.dispatch(ListIntent::RowVisible(row));
    }

    pub fn tap_purchase(&mut self) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.completion_tx.clone();
        let generation = self.purchase_slot.next_generation();
        let task = tokio::spawn(async move {
            let result = gateway.purchase().await;
            let _ = tx.send(Completion::Purchase { generation, result });
        });
        self.purchase_slot.track(task);
    }

    pub fn tap_like(&mut self) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.completion_tx.clone();
        let generation = self.like_slot.next_generation();
        let task = tokio::spawn(async move {
            let result = gateway.like().await;
            let _ = tx.send(Completion::Like { generation, result });
        });
        self.like_slot.track(task);
    }

    // -- Completion handling -------------------------------------------------

    /// Wait for one gateway result and apply it.
    ///
    /// Returns `false` without waiting when nothing is in flight.
    pub async fn process_next(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }
        match self.completion_rx.recv().await {
            Some(completion) => {
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    /// Apply every result that has already arrived. Never waits.
    pub fn drain_completed(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Apply results until no request is in flight.
    ///
    /// Never returns if the gateway never answers.
    pub async fn settle(&mut self) {
        while self.process_next().await {}
    }

    // -- Read access ---------------------------------------------------------

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn liked(&self) -> bool {
        self.state.liked
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    pub fn filter(&self) -> Filter {
        self.state.filter
    }

    pub fn next_page(&self) -> Option<u32> {
        self.state.next_page
    }

    pub fn available_next_page(&self) -> Option<u32> {
        self.state.available_next_page()
    }

    pub fn page_load(&self) -> PageLoad {
        self.page_load
    }

    /// Read-only copy of the whole state.
    pub fn snapshot(&self) -> ListState {
        self.state.clone()
    }

    /// Whether no request of any kind is in flight.
    pub fn is_idle(&self) -> bool {
        !self.page_slot.is_in_flight()
            && !self.purchase_slot.is_in_flight()
            && !self.like_slot.is_in_flight()
    }

    // -- Internals -----------------------------------------------------------

    /// Run the reducer and issue a page fetch if the request key moved.
    fn dispatch(&mut self, intent: ListIntent) {
        let before = self.state.page_request();
        self.state = ListReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state.page_request() != before {
            self.request_page();
        }
    }

    fn request_page(&mut self) {
        let request = self.state.page_request();
        let gateway = Arc::clone(&self.gateway);
        let tx = self.completion_tx.clone();
        let generation = self.page_slot.next_generation();

        tracing::debug!(
            gateway = gateway.name(),
            page = request.page,
            filter = %request.filter,
            generation,
            "Requesting page"
        );

        let task = tokio::spawn(async move {
            let result = gateway.fetch_items(request.page, request.filter).await;
            let _ = tx.send(Completion::Page { generation, result });
        });
        self.page_slot.track(task);
        self.page_load = PageLoad::Fetching(request);
    }

    fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Page { generation, result } => {
                if !self.page_slot.finish(generation) {
                    tracing::trace!(generation, "Dropping stale page result");
                    return;
                }
                self.page_load = PageLoad::Idle;
                match result {
                    Ok(page) => {
                        tracing::debug!(
                            received = page.items.len(),
                            next_page = page.next_page,
                            replace = page.replaces_list(),
                            "Page loaded"
                        );
                        self.dispatch(ListIntent::PageLoaded(page));
                        self.events.emit(ListEvent::ItemsUpdated);
                    }
                    Err(err) => self.report("fetch_items", err),
                }
            }

            Completion::Purchase { generation, result } => {
                if !self.purchase_slot.finish(generation) {
                    tracing::trace!(generation, "Dropping stale purchase result");
                    return;
                }
                match result {
                    Ok(Acknowledgement) => self.events.emit(ListEvent::PurchaseSucceeded),
                    Err(err) => self.report("purchase", err),
                }
            }

            Completion::Like { generation, result } => {
                if !self.like_slot.finish(generation) {
                    tracing::trace!(generation, "Dropping stale like result");
                    return;
                }
                match result {
                    Ok(Acknowledgement) => {
                        self.dispatch(ListIntent::LikeConfirmed);
                        self.events.emit(ListEvent::LikeChanged(self.state.liked));
                    }
                    Err(err) => self.report("like", err),
                }
            }
        }
    }

    fn report(&mut self, operation: &'static str, err: TransportError) {
        tracing::warn!(operation, kind = err.kind(), error = %err, "Gateway call failed");
        self.events.emit(ListEvent::Error(err));
    }
}
