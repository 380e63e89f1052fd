//! Scripted gateway for controller tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use pagefeed::{Acknowledgement, FetchGateway, Filter, Item, Page, TransportError};
use tokio::sync::Mutex;

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchItems { page: u32, filter: Filter },
    Purchase,
    Like,
}

/// A scripted answer: what to return and how long to wait first.
#[derive(Debug, Clone)]
pub struct Scripted<T> {
    pub result: Result<T, TransportError>,
    pub delay_ms: u64,
}

impl<T> Scripted<T> {
    pub fn ok(value: T, delay_ms: u64) -> Self {
        Self {
            result: Ok(value),
            delay_ms,
        }
    }

    pub fn fail(reason: &str, delay_ms: u64) -> Self {
        Self {
            result: Err(TransportError::unavailable(reason)),
            delay_ms,
        }
    }
}

/// Gateway that replays scripted answers in call order.
///
/// Unscripted page calls return `PER_PAGE` items numbered like the
/// simulated gateway with `next_page = page + 1`; unscripted actions
/// succeed. Everything waits `default_delay_ms` unless scripted otherwise.
pub struct MockGateway {
    default_delay_ms: u64,
    pages: Mutex<VecDeque<Scripted<Page>>>,
    purchases: Mutex<VecDeque<Scripted<Acknowledgement>>>,
    likes: Mutex<VecDeque<Scripted<Acknowledgement>>>,
    calls: Mutex<Vec<Call>>,
}

pub const PER_PAGE: u32 = 20;

impl MockGateway {
    pub fn new(default_delay_ms: u64) -> Self {
        Self {
            default_delay_ms,
            pages: Mutex::new(VecDeque::new()),
            purchases: Mutex::new(VecDeque::new()),
            likes: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn script_page(&self, answer: Scripted<Page>) {
        self.pages.lock().await.push_back(answer);
    }

    pub async fn script_purchase(&self, answer: Scripted<Acknowledgement>) {
        self.purchases.lock().await.push_back(answer);
    }

    pub async fn script_like(&self, answer: Scripted<Acknowledgement>) {
        self.likes.lock().await.push_back(answer);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    pub async fn fetch_calls(&self) -> Vec<(u32, Filter)> {
        self.calls()
            .await
            .into_iter()
            .filter_map(|call| match call {
                Call::FetchItems { page, filter } => Some((page, filter)),
                _ => None,
            })
            .collect()
    }

    async fn answer<T>(
        &self,
        queue: &Mutex<VecDeque<Scripted<T>>>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T, TransportError> {
        let scripted = queue.lock().await.pop_front();
        let (result, delay_ms) = match scripted {
            Some(Scripted { result, delay_ms }) => (result, delay_ms),
            None => (Ok(fallback()), self.default_delay_ms),
        };
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        result
    }
}

/// Build a page of `count` items starting at `first`.
pub fn page_of(first: u32, count: u32, name: &str, next_page: u32) -> Page {
    Page {
        items: (first..first + count)
            .map(|value| Item::new(value, name, 30))
            .collect(),
        next_page,
    }
}

#[async_trait]
impl FetchGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_items(&self, page: u32, filter: Filter) -> Result<Page, TransportError> {
        self.calls
            .lock()
            .await
            .push(Call::FetchItems { page, filter });
        self.answer(&self.pages, || {
            page_of((page - 1) * PER_PAGE + 1, PER_PAGE, filter.as_str(), page + 1)
        })
        .await
    }

    async fn purchase(&self) -> Result<Acknowledgement, TransportError> {
        self.calls.lock().await.push(Call::Purchase);
        self.answer(&self.purchases, || Acknowledgement).await
    }

    async fn like(&self) -> Result<Acknowledgement, TransportError> {
        self.calls.lock().await.push(Call::Like);
        self.answer(&self.likes, || Acknowledgement).await
    }
}
