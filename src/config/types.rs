use serde::{Deserialize, Serialize};

use crate::model::Filter;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Settings for the simulated gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Delay before every answer, in milliseconds (default: 200).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Items per page (default: 20).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Inclusive lower bound of generated ages (default: 20).
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    /// Exclusive upper bound of generated ages (default: 40).
    #[serde(default = "default_max_age")]
    pub max_age: u32,
}

/// Settings for the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListConfig {
    /// Filter selected when the screen opens (default: "newest").
    #[serde(default)]
    pub initial_filter: Filter,
}

fn default_delay_ms() -> u64 {
    200
}

fn default_per_page() -> u32 {
    20
}

fn default_min_age() -> u32 {
    20
}

fn default_max_age() -> u32 {
    40
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            per_page: default_per_page(),
            min_age: default_min_age(),
            max_age: default_max_age(),
        }
    }
}
