use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

/// One fetched entry, before pattern assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageItem<S = mosaic::SourceRef> {
    /// Unique for the item's lifetime in the engine, e.g. `"3-17"`.
    pub id: String,
    /// Opaque payload handle, handed through to the engine untouched.
    pub source: S,
}

impl<S> PageItem<S> {
    pub fn new(id: impl Into<String>, source: S) -> Self {
        Self {
            id: id.into(),
            source,
        }
    }
}

/// Builds the conventional `"{page}-{index}"` item id.
pub fn page_item_id(page: usize, index_within_page: usize) -> String {
    alloc::format!("{page}-{index_within_page}")
}

/// A fetch failure.
///
/// Distinct from the empty-page end-of-stream sentinel on purpose: a failed
/// page does not mean the collection is exhausted, and the pager will not
/// treat it as such.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("fetching page {page} failed: {reason}")]
pub struct ProviderError {
    pub page: usize,
    pub reason: String,
}

impl ProviderError {
    pub fn new(page: usize, reason: impl Into<String>) -> Self {
        Self {
            page,
            reason: reason.into(),
        }
    }
}

/// A paged, ordered item source.
///
/// Contract:
/// - Results for the same `page` are idempotent and order-stable.
/// - An empty `Ok` page is the sole end-of-stream signal.
/// - `Err` means the fetch failed; it is never end-of-data.
/// - Implementations terminate rather than block indefinitely.
///
/// A provider may do its actual I/O on another thread or task, but the
/// result must be handed back to the context that owns the engine before
/// items are appended; the engine performs no synchronization of its own.
pub trait ItemProvider<S> {
    fn fetch_page(
        &mut self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<PageItem<S>>, ProviderError>;
}
