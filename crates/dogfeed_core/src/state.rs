use std::collections::BTreeSet;

use dogfeed_logging::feed_warn;
use uuid::Uuid;

use crate::view_model::{EntryRowView, FeedViewModel};

pub type RequestId = u64;
pub type EntryId = Uuid;

/// One fetched image. The id is generated locally, never taken from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogImageEntry {
    id: EntryId,
    url: String,
}

impl DogImageEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    items: Vec<DogImageEntry>,
    outstanding: BTreeSet<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            outstanding: BTreeSet::new(),
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[DogImageEntry] {
        &self.items
    }

    /// True while at least one fetch has not settled.
    pub fn busy(&self) -> bool {
        !self.outstanding.is_empty()
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    pub fn view(&self) -> FeedViewModel {
        FeedViewModel {
            entries: self
                .items
                .iter()
                .enumerate()
                .map(|(position, entry)| EntryRowView {
                    id: entry.id,
                    url: entry.url.clone(),
                    position: position + 1,
                })
                .collect(),
            busy: self.busy(),
            outstanding: self.outstanding.len(),
            is_empty: self.items.is_empty(),
        }
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_fetch(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.outstanding.insert(request_id);
        self.dirty = true;
        request_id
    }

    /// Marks a fetch as settled. Returns false if the id was not outstanding.
    pub(crate) fn settle_fetch(&mut self, request_id: RequestId) -> bool {
        let known = self.outstanding.remove(&request_id);
        if known {
            self.dirty = true;
        } else {
            feed_warn!("Settled fetch {} was not outstanding", request_id);
        }
        known
    }

    /// Appends a new entry at the tail and returns the new list length.
    pub(crate) fn append(&mut self, url: String) -> usize {
        let mut entry = DogImageEntry::new(url);
        // Ids stay unique within the list.
        while self.items.iter().any(|existing| existing.id == entry.id) {
            entry.id = Uuid::new_v4();
        }
        self.items.push(entry);
        self.dirty = true;
        self.items.len()
    }

    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        self.dirty = true;
        removed
    }
}
