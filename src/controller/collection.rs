//! Paginated collection controller.
//!
//! One instance backs each list view (pallets, packs, overview). The
//! controller never talks to the network itself: callers ask it for a
//! [`FetchTicket`], run the request, and hand the result back with
//! [`Collection::finish`]. Every ticket carries a generation number and only
//! the most recently issued one is accepted, so a slow response for an old
//! query can never overwrite a newer one.

use crate::api::{ListQuery, Page};

use super::pagination::PageWindow;

/// Where a collection is in its load cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Loaded,
    /// The last fetch failed; previous items are kept
    Failed(String),
}

/// Identifies one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: ListQuery,
}

/// What [`Collection::finish`] did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response belonged to an older request and was dropped
    Stale,
    /// Items and total were replaced
    Applied,
    /// The new total put the offset past the last page; the offset was
    /// clamped and a refetch is required
    Clamped,
    /// The request failed; the error is recorded and items are kept
    Failed,
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    window: PageWindow,
    search: String,
    items: Vec<T>,
    state: LoadState,
    generation: u64,
}

impl<T> Collection<T> {
    pub fn new(window: PageWindow) -> Self {
        Self {
            window,
            search: String::new(),
            items: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn total(&self) -> u64 {
        self.window.total()
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Generation of the most recently issued fetch
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Query for the current window and search term
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.window.limit(), self.window.offset()).with_search(self.search.clone())
    }

    /// Issue a fetch for the current parameters. Any earlier ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        FetchTicket {
            generation: self.generation,
            query: self.query(),
        }
    }

    /// Apply the result of the fetch identified by `generation`
    pub fn finish(&mut self, generation: u64, result: Result<Page<T>, String>) -> FetchOutcome {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "discarding stale list response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                if self.window.set_total(page.total) {
                    // Still loading: the caller refetches the clamped window.
                    return FetchOutcome::Clamped;
                }
                self.items = page.items;
                self.state = LoadState::Loaded;
                FetchOutcome::Applied
            }
            Err(message) => {
                tracing::warn!("list fetch failed: {}", message);
                self.state = LoadState::Failed(message);
                FetchOutcome::Failed
            }
        }
    }

    /// Change the search term. Resets to the first page; returns whether a refetch is needed.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into();
        if search == self.search {
            return false;
        }
        self.search = search;
        self.window.reset();
        true
    }

    /// Change the page size. Resets to the first page; returns whether a refetch is needed.
    pub fn set_limit(&mut self, limit: u32) -> bool {
        self.window.set_limit(limit)
    }

    pub fn cycle_limit(&mut self) -> bool {
        self.window.cycle_limit()
    }

    pub fn go_prev(&mut self) -> bool {
        self.window.go_prev()
    }

    pub fn go_next(&mut self) -> bool {
        self.window.go_next()
    }

    /// The scope the collection lists changed (e.g. a different parent).
    /// Always resets to the first page and requires a refetch.
    pub fn rescope(&mut self) -> bool {
        self.window.reset();
        true
    }

    /// Back to the first page; returns whether the window moved
    pub fn reset_offset(&mut self) -> bool {
        self.window.reset()
    }
}
