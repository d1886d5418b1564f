// Example: scroll through a synthetic 100-item collection, fetching pages
// on demand as the viewport nears the bottom.
use mosaic::{Mosaic, MosaicOptions};
use mosaic_adapter::{ItemProvider, PageItem, Pager, ProviderError, page_item_id};

struct DemoProvider {
    total: usize,
}

impl ItemProvider<String> for DemoProvider {
    fn fetch_page(
        &mut self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<PageItem<String>>, ProviderError> {
        let start = page * page_size;
        let end = (start + page_size).min(self.total);
        Ok((start..end.max(start))
            .map(|i| {
                PageItem::new(
                    page_item_id(page, i - start),
                    format!("images/{}.png", i + 1),
                )
            })
            .collect())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const VIEWPORT: f64 = 900.0;

    let mut engine = Mosaic::new(MosaicOptions::new())?;
    engine.update_container_size(1260.0, VIEWPORT)?;
    let mut pager = Pager::new(engine.options().page_size);
    let mut provider = DemoProvider { total: 100 };

    let mut offset = 0.0;
    while pager.has_more() || offset < engine.max_scroll_offset(VIEWPORT) {
        pager.on_scroll(&mut engine, &mut provider, offset, VIEWPORT)?;
        offset += 300.0;
    }

    println!(
        "pages: {}, items: {}, content height: {}",
        pager.current_page(),
        engine.len(),
        engine.content_height()
    );
    Ok(())
}
