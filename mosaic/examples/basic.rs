// Example: pack one page of items and print the visible placements.
use mosaic::{LayoutError, Mosaic, MosaicItem, MosaicOptions, PatternTable};

fn main() -> Result<(), LayoutError> {
    let mut engine = Mosaic::new(
        MosaicOptions::new().with_on_layout_updated(|height| println!("content height: {height}")),
    )?;
    engine.update_container_size(1280.0, 720.0)?;

    let table = PatternTable::default();
    let items = (0..12).map(|i| {
        MosaicItem::new(
            format!("0-{i}"),
            table.assign(i),
            format!("images/{}.png", i + 1),
        )
    });
    engine.add_items(items)?;
    engine.layout(0.0, 720.0)?;

    engine.for_each_visible(|item, position| {
        println!(
            "{} -> ({}, {}) {}x{}",
            item.id, position.left, position.top, position.width, position.height
        );
    });
    Ok(())
}
