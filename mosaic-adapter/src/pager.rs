use mosaic::{LayoutError, Mosaic, MosaicItem};
use thiserror::Error;

use crate::{ItemProvider, ProviderError};

/// Outcome of a load attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and appended, with this many items.
    Loaded(usize),
    /// The provider returned an empty page; the collection is exhausted.
    EndOfStream,
    /// Nothing happened: a fetch was already in flight, the collection is
    /// exhausted, or the scroll position is not near the end yet.
    Skipped,
}

#[derive(Debug, PartialEq, Error)]
pub enum PagerError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// The single owner of pagination state.
///
/// The engine deliberately carries no `is_loading`/`has_more`; the pager
/// holds both and enforces at most one fetch in flight across its own API.
/// Callers should size the engine's container before the first load, or the
/// append will surface a configuration error.
#[derive(Clone, Debug)]
pub struct Pager {
    page: usize,
    page_size: usize,
    is_loading: bool,
    has_more: bool,
    prefetch_threshold: f64,
}

impl Pager {
    /// `page_size` is forwarded to the provider on every fetch.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size,
            is_loading: false,
            has_more: true,
            prefetch_threshold: 1000.0,
        }
    }

    /// Remaining content below the viewport, in pixels, under which
    /// [`Self::on_scroll`] triggers a prefetch.
    pub fn with_prefetch_threshold(mut self, prefetch_threshold: f64) -> Self {
        self.prefetch_threshold = prefetch_threshold;
        self
    }

    /// The next page index to fetch; also the number of pages consumed.
    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Fetches the next page, assigns patterns cyclically by position
    /// within the page, and appends the items to the engine.
    ///
    /// Gated: returns [`LoadOutcome::Skipped`] while a fetch is in flight
    /// or after the provider has reported end-of-stream. A provider failure
    /// is propagated and leaves the page counter and `has_more` untouched,
    /// so the caller can retry the same page.
    pub fn load_more<S, P: ItemProvider<S>>(
        &mut self,
        engine: &mut Mosaic<S>,
        provider: &mut P,
    ) -> Result<LoadOutcome, PagerError> {
        if self.is_loading || !self.has_more {
            return Ok(LoadOutcome::Skipped);
        }

        self.is_loading = true;
        let fetched = provider.fetch_page(self.page, self.page_size);
        self.is_loading = false;

        let entries = match fetched {
            Ok(entries) => entries,
            Err(err) => {
                awarn!(page = self.page, %err, "page fetch failed");
                return Err(err.into());
            }
        };

        if entries.is_empty() {
            self.has_more = false;
            adebug!(page = self.page, "provider exhausted");
            return Ok(LoadOutcome::EndOfStream);
        }

        let table = engine.options().patterns.clone();
        let count = entries.len();
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| MosaicItem::new(entry.id, table.assign(index), entry.source));

        // The page is consumed once the fetch succeeds; a layout error does
        // not re-queue it.
        self.page += 1;
        engine.add_items(items)?;
        adebug!(page = self.page, count, "page appended");
        Ok(LoadOutcome::Loaded(count))
    }

    /// Scroll-driven entry point: re-runs the engine's layout pass, then
    /// prefetches when the content remaining below the viewport falls
    /// inside the prefetch threshold.
    pub fn on_scroll<S, P: ItemProvider<S>>(
        &mut self,
        engine: &mut Mosaic<S>,
        provider: &mut P,
        scroll_offset: f64,
        viewport_height: f64,
    ) -> Result<LoadOutcome, PagerError> {
        engine.layout(scroll_offset, viewport_height)?;

        let remaining = engine.content_height() - (scroll_offset + viewport_height);
        if remaining < self.prefetch_threshold {
            self.load_more(engine, provider)
        } else {
            Ok(LoadOutcome::Skipped)
        }
    }

    /// Forgets all consumed pages and clears the engine. `has_more` resets
    /// to `true`, so the next load starts over at page zero.
    pub fn clear<S>(&mut self, engine: &mut Mosaic<S>) {
        self.page = 0;
        self.has_more = true;
        self.is_loading = false;
        engine.clear();
    }
}
