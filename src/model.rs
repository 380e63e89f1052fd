//! Domain types shared by the gateway and the list controller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub value: u32,
    pub name: String,
    pub age: u32,
}

impl Item {
    pub fn new(value: u32, name: impl Into<String>, age: u32) -> Self {
        Self {
            value,
            name: name.into(),
            age,
        }
    }
}

/// Sort order selected by the user and forwarded to the gateway as `order_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    Newest,
    Oldest,
    Popular,
}

impl Filter {
    /// All filters in selector order.
    pub const ALL: [Filter; 3] = [Filter::Newest, Filter::Oldest, Filter::Popular];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::Newest => "newest",
            Filter::Oldest => "oldest",
            Filter::Popular => "popular",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}' (expected newest, oldest or popular)")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

/// One page of items plus the cursor of the page after it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Item>,
    pub next_page: u32,
}

impl Page {
    /// Whether this page restarts the list instead of extending it.
    ///
    /// `2` is what the first page reports; `0` means the source restarted.
    pub fn replaces_list(&self) -> bool {
        self.next_page == 0 || self.next_page == 2
    }
}

/// Success marker for purchase and like calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Acknowledgement;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!("Oldest".parse::<Filter>(), Ok(Filter::Oldest));
        assert_eq!(" popular ".parse::<Filter>(), Ok(Filter::Popular));
        assert!("latest".parse::<Filter>().is_err());
    }

    #[test]
    fn filter_display_matches_wire_name() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string(), filter.as_str());
        }
    }

    #[test]
    fn items_compare_structurally() {
        assert_eq!(Item::new(1, "newest", 25), Item::new(1, "newest", 25));
        assert_ne!(Item::new(1, "newest", 25), Item::new(1, "newest", 26));
        assert_ne!(Item::new(1, "newest", 25), Item::new(1, "oldest", 25));
    }

    #[test]
    fn replace_sentinel_is_zero_or_two() {
        let page = |next_page| Page {
            items: Vec::new(),
            next_page,
        };
        assert!(page(0).replaces_list());
        assert!(page(2).replaces_list());
        assert!(!page(1).replaces_list());
        assert!(!page(3).replaces_list());
        assert!(!page(10).replaces_list());
    }
}
