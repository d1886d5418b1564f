// Example: reconcile a visual pool against render events.
//
// The engine emits a render callback for every visible item on every pass
// and no removal event at all. The sink keeps its pool keyed by item id and
// prunes entries whose ids were not part of the latest visible set.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use mosaic::{LayoutError, Mosaic, MosaicItem, MosaicOptions, PatternTable, Position};

fn main() -> Result<(), LayoutError> {
    let visuals: Arc<Mutex<HashMap<String, Position>>> = Arc::new(Mutex::new(HashMap::new()));
    let sink = Arc::clone(&visuals);

    let mut engine = Mosaic::new(MosaicOptions::new().with_on_render(
        move |item: &MosaicItem<String>, position| {
            // create-or-update, keyed by id
            sink.lock().unwrap().insert(item.id.clone(), position);
            Ok(())
        },
    ))?;
    engine.update_container_size(1260.0, 600.0)?;

    let table = PatternTable::default();
    engine.add_items((0..96).map(|i| {
        MosaicItem::new(
            format!("0-{i}"),
            table.assign(i),
            format!("images/{}.png", i + 1),
        )
    }))?;

    for scroll in [0.0, 2400.0, 4800.0] {
        engine.layout(scroll, 600.0)?;

        // the removal half of the contract lives here, not in the engine
        let mut live = Vec::new();
        engine.for_each_visible(|item, _| live.push(item.id.clone()));
        visuals.lock().unwrap().retain(|id, _| live.contains(id));

        println!("scroll {scroll}: {} visuals alive", visuals.lock().unwrap().len());
    }
    Ok(())
}
