//! State of the paginated list.

use serde::Serialize;

use crate::model::{Filter, Item};
use crate::mvi::ViewState;

/// First page number; also the value the cursor is never allowed to jump to.
pub const INITIAL_PAGE: u32 = 1;

/// Everything the list screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState {
    /// Page currently requested (loading or loaded). Never zero.
    pub current_page: u32,
    pub filter: Filter,
    /// Accumulated items in page order.
    pub items: Vec<Item>,
    /// Cursor reported by the last successful page fetch.
    pub next_page: Option<u32>,
    pub liked: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::with_filter(Filter::default())
    }
}

impl ViewState for ListState {}

impl ListState {
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            current_page: INITIAL_PAGE,
            filter,
            items: Vec::new(),
            next_page: None,
            liked: false,
        }
    }

    /// Cursor that a scroll to the last row may advance to.
    ///
    /// `None` when no cursor is known yet, when the cursor points back at
    /// the first page, or when that page is already being requested.
    pub fn available_next_page(&self) -> Option<u32> {
        self.next_page
            .filter(|&next| next != INITIAL_PAGE && next != self.current_page)
    }

    /// Whether `row` is the last loaded row.
    pub fn is_last_row(&self, row: usize) -> bool {
        self.items.len().checked_sub(1) == Some(row)
    }

    /// Parameters of the page request this state implies.
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            filter: self.filter,
        }
    }
}

/// Arguments of a single `fetch_items` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub filter: Filter,
}

/// Page loading lifecycle, kept beside [`ListState`] by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLoad {
    /// Ready for the next trigger.
    #[default]
    Idle,
    /// A page request is in flight.
    Fetching(PageRequest),
}

impl PageLoad {
    pub fn is_fetching(&self) -> bool {
        matches!(self, Self::Fetching(_))
    }

    /// Page being fetched, if any.
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Fetching(request) => Some(request.page),
            Self::Idle => None,
        }
    }
}
