//! Intents for the list state.

use crate::model::{Filter, Page};
use crate::mvi::Intent;

/// Intents that can be dispatched to the list reducer.
///
/// Gateway failures never become intents: they leave the state untouched
/// and are only reported to observers.
#[derive(Debug, Clone)]
pub enum ListIntent {
    /// User picked a filter in the selector.
    FilterSelected(Filter),

    /// A row scrolled into view.
    RowVisible(usize),

    /// The page request currently in flight succeeded.
    PageLoaded(Page),

    /// A like call succeeded.
    LikeConfirmed,
}

impl Intent for ListIntent {}
