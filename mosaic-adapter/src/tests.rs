use crate::*;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use mosaic::{Mosaic, MosaicOptions};

// base_unit 200 + gap 10, the default options
const UNIT: f64 = 210.0;

/// A provider backed by a fixed collection, optionally failing a number of
/// times before serving a page.
struct ScriptedProvider {
    total: usize,
    fail_remaining: usize,
    fetches: usize,
}

impl ScriptedProvider {
    fn with_total(total: usize) -> Self {
        Self {
            total,
            fail_remaining: 0,
            fetches: 0,
        }
    }
}

impl ItemProvider<String> for ScriptedProvider {
    fn fetch_page(
        &mut self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<PageItem<String>>, ProviderError> {
        self.fetches += 1;
        if self.fail_remaining > 0 {
            self.fail_remaining -= 1;
            return Err(ProviderError::new(page, "backend unavailable"));
        }
        let start = page * page_size;
        let end = (start + page_size).min(self.total);
        Ok((start..end.max(start))
            .map(|i| {
                PageItem::new(
                    page_item_id(page, i - start),
                    alloc::format!("images/{}.png", i + 1),
                )
            })
            .collect())
    }
}

fn sized_engine(columns: usize) -> Mosaic<String> {
    let mut engine = Mosaic::new(MosaicOptions::new().with_page_size(6)).unwrap();
    engine
        .update_container_size(columns as f64 * UNIT + 5.0, 900.0)
        .unwrap();
    engine
}

#[test]
fn drains_pages_then_reports_end_of_stream() {
    let mut engine = sized_engine(3);
    let mut pager = Pager::new(engine.options().page_size);
    let mut provider = ScriptedProvider::with_total(8);

    assert_eq!(
        pager.load_more(&mut engine, &mut provider).unwrap(),
        LoadOutcome::Loaded(6)
    );
    assert_eq!(
        pager.load_more(&mut engine, &mut provider).unwrap(),
        LoadOutcome::Loaded(2)
    );
    assert_eq!(
        pager.load_more(&mut engine, &mut provider).unwrap(),
        LoadOutcome::EndOfStream
    );

    assert!(!pager.has_more());
    assert_eq!(pager.current_page(), 2);
    assert_eq!(engine.len(), 8);

    // exhausted pagers skip without touching the provider again
    let fetches = provider.fetches;
    assert_eq!(
        pager.load_more(&mut engine, &mut provider).unwrap(),
        LoadOutcome::Skipped
    );
    assert_eq!(provider.fetches, fetches);
}

#[test]
fn provider_failure_is_not_end_of_stream() {
    let mut engine = sized_engine(3);
    let mut pager = Pager::new(engine.options().page_size);
    let mut provider = ScriptedProvider::with_total(8);
    provider.fail_remaining = 1;

    let err = pager.load_more(&mut engine, &mut provider).unwrap_err();
    assert_eq!(
        err,
        PagerError::Provider(ProviderError::new(0, "backend unavailable"))
    );

    // the failed page stays queued, and the pager is ready to retry it
    assert!(pager.has_more());
    assert!(!pager.is_loading());
    assert_eq!(pager.current_page(), 0);
    assert!(engine.is_empty());

    assert_eq!(
        pager.load_more(&mut engine, &mut provider).unwrap(),
        LoadOutcome::Loaded(6)
    );
}

#[test]
fn patterns_cycle_within_each_page() {
    let mut engine = sized_engine(3);
    let table = engine.options().patterns.clone();
    let mut pager = Pager::new(engine.options().page_size);
    let mut provider = ScriptedProvider::with_total(12);

    pager.load_more(&mut engine, &mut provider).unwrap();
    pager.load_more(&mut engine, &mut provider).unwrap();

    let items = engine.items();
    for (index, item) in items.iter().take(6).enumerate() {
        assert_eq!(item.pattern, table.assign(index));
    }
    // the second page restarts the cycle at the first pattern
    assert_eq!(items[6].pattern, table.assign(0));
    assert_eq!(items[6].id, "1-0".to_string());
}

#[test]
fn on_scroll_prefetches_only_near_the_end() {
    let mut engine = sized_engine(3);
    let mut pager = Pager::new(engine.options().page_size);
    let mut provider = ScriptedProvider::with_total(60);

    // an empty engine has no content below the viewport, so the first
    // scroll bootstraps the first page
    assert_eq!(
        pager
            .on_scroll(&mut engine, &mut provider, 0.0, 500.0)
            .unwrap(),
        LoadOutcome::Loaded(6)
    );

    // keep feeding pages until the content outruns the threshold
    while engine.content_height() - 500.0 < 1000.0 {
        pager.load_more(&mut engine, &mut provider).unwrap();
    }

    let fetches = provider.fetches;
    assert_eq!(
        pager
            .on_scroll(&mut engine, &mut provider, 0.0, 500.0)
            .unwrap(),
        LoadOutcome::Skipped
    );
    assert_eq!(provider.fetches, fetches);

    // near the bottom the remaining content shrinks under the threshold
    let near_end = engine.max_scroll_offset(500.0);
    assert_eq!(
        pager
            .on_scroll(&mut engine, &mut provider, near_end, 500.0)
            .unwrap(),
        LoadOutcome::Loaded(6)
    );
}

#[test]
fn clear_resets_paging_and_engine() {
    let mut engine = sized_engine(3);
    let mut pager = Pager::new(engine.options().page_size);
    let mut provider = ScriptedProvider::with_total(8);

    pager.load_more(&mut engine, &mut provider).unwrap();
    pager.load_more(&mut engine, &mut provider).unwrap();
    pager.load_more(&mut engine, &mut provider).unwrap();
    assert!(!pager.has_more());
    assert!(!engine.is_empty());

    pager.clear(&mut engine);
    assert_eq!(pager.current_page(), 0);
    assert!(pager.has_more());
    assert!(engine.is_empty());
    assert_eq!(engine.content_height(), 0.0);

    // loading starts over from page zero
    assert_eq!(
        pager.load_more(&mut engine, &mut provider).unwrap(),
        LoadOutcome::Loaded(6)
    );
    assert_eq!(engine.items()[0].id, "0-0".to_string());
}

#[test]
fn page_item_id_uses_page_and_index() {
    assert_eq!(page_item_id(3, 17), "3-17".to_string());
    assert_eq!(page_item_id(0, 0), "0-0".to_string());
}
