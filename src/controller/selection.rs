//! Master/detail selection.
//!
//! Keeps one selected id in step with the visible page and tracks the detail
//! record fetched for it. Detail fetches are generation-tagged like list
//! fetches, and a failed detail fetch simply clears the record.

use crate::types::{Identified, RecordId};

/// Request for the detail record of `id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    pub generation: u64,
    pub id: RecordId,
}

#[derive(Debug, Clone)]
pub struct Selection<T> {
    selected_id: Option<RecordId>,
    record: Option<T>,
    generation: u64,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            selected_id: None,
            record: None,
            generation: 0,
        }
    }
}

impl<T: Identified> Selection<T> {
    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected_id
    }

    pub fn record(&self) -> Option<&T> {
        self.record.as_ref()
    }

    /// Select `id` (or nothing). Returns a detail ticket when a fetch is needed.
    ///
    /// Re-selecting the current id is a no-op. Selecting nothing clears the
    /// record immediately and invalidates any in-flight detail fetch.
    pub fn select(&mut self, id: Option<RecordId>) -> Option<DetailTicket> {
        if id == self.selected_id {
            return None;
        }
        self.selected_id = id;
        self.record = None;
        self.generation += 1;
        id.map(|id| DetailTicket {
            generation: self.generation,
            id,
        })
    }

    /// Re-run selection against a freshly loaded page.
    ///
    /// If the selected id is missing from `items` the first item is selected;
    /// an empty page clears both id and record.
    pub fn repair(&mut self, items: &[T]) -> Option<DetailTicket> {
        let still_present = self
            .selected_id
            .is_some_and(|id| items.iter().any(|item| item.id() == id));
        if still_present {
            return None;
        }
        self.select(items.first().map(Identified::id))
    }

    /// Apply a detail response; `None` means the fetch failed.
    /// Returns false for stale responses.
    pub fn finish_detail(&mut self, generation: u64, record: Option<T>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.record = record.filter(|r| Some(r.id()) == self.selected_id);
        true
    }

    /// Replace the detail record with a saved version from the server
    pub fn replace(&mut self, record: T) {
        if Some(record.id()) == self.selected_id {
            self.record = Some(record);
        }
    }
}
