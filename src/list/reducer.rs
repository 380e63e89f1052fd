//! Reducer for the list state.

use crate::mvi::Reducer;

use super::intent::ListIntent;
use super::state::{ListState, INITIAL_PAGE};

/// Reducer for list state transitions.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::FilterSelected(filter) => {
                if filter == state.filter {
                    state
                } else {
                    ListState {
                        filter,
                        current_page: INITIAL_PAGE,
                        ..state
                    }
                }
            }

            ListIntent::RowVisible(row) => match state.available_next_page() {
                Some(next) if state.is_last_row(row) => ListState {
                    current_page: next,
                    ..state
                },
                _ => state,
            },

            ListIntent::PageLoaded(page) => {
                let replace = page.replaces_list();
                let mut items = state.items;
                if replace {
                    items = page.items;
                } else {
                    items.extend(page.items);
                }
                ListState {
                    items,
                    next_page: Some(page.next_page),
                    ..state
                }
            }

            ListIntent::LikeConfirmed => ListState {
                liked: !state.liked,
                ..state
            },
        }
    }
}
