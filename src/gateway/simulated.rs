//! In-memory gateway that synthesizes pages after a fixed delay.

use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use super::error::TransportError;
use super::traits::FetchGateway;
use crate::config::GatewayConfig;
use crate::model::{Acknowledgement, Filter, Item, Page};

/// Gateway that answers every call locally.
///
/// Page `p` contains `per_page` items numbered
/// `(p - 1) * per_page + 1 ..= p * per_page`, all named after the filter,
/// with a random age. The reported cursor is always `p + 1`.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    per_page: u32,
    ages: Range<u32>,
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::from_config(&GatewayConfig::default())
    }
}

impl SimulatedGateway {
    pub fn new(delay: Duration, per_page: u32, ages: Range<u32>) -> Self {
        Self {
            delay,
            per_page,
            ages,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(
            Duration::from_millis(config.delay_ms),
            config.per_page,
            config.min_age..config.max_age,
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    fn build_page(&self, page: u32, filter: Filter) -> Page {
        let mut rng = rand::rng();
        let first = (page - 1) * self.per_page;
        let items = (1..=self.per_page)
            .map(|i| {
                let age = if self.ages.is_empty() {
                    self.ages.start
                } else {
                    rng.random_range(self.ages.clone())
                };
                Item::new(first + i, filter.as_str(), age)
            })
            .collect();

        Page {
            items,
            next_page: page.saturating_add(1),
        }
    }
}

#[async_trait]
impl FetchGateway for SimulatedGateway {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fetch_items(&self, page: u32, filter: Filter) -> Result<Page, TransportError> {
        if page == 0 {
            return Err(TransportError::InvalidRequest(
                "page numbers start at 1".to_string(),
            ));
        }
        if page.checked_mul(self.per_page).is_none() {
            return Err(TransportError::InvalidRequest(format!(
                "page {} is out of range",
                page
            )));
        }

        tracing::debug!(
            order_by = %filter,
            page,
            per_page = self.per_page,
            "Fetching items"
        );
        tokio::time::sleep(self.delay).await;

        Ok(self.build_page(page, filter))
    }

    async fn purchase(&self) -> Result<Acknowledgement, TransportError> {
        tracing::debug!("Purchasing item");
        tokio::time::sleep(self.delay).await;
        Ok(Acknowledgement)
    }

    async fn like(&self) -> Result<Acknowledgement, TransportError> {
        tracing::debug!("Liking item");
        tokio::time::sleep(self.delay).await;
        Ok(Acknowledgement)
    }
}
