use alloc::vec::Vec;

use crate::{LayoutError, MosaicItem, Position};

/// Transient cell ownership for one packing pass.
///
/// Rows and cells grow lazily as the scan reaches them; unseen cells are
/// empty. A fresh grid is built by every pass and dropped with it.
#[derive(Debug, Default)]
struct OccupancyGrid {
    rows: Vec<Vec<Option<usize>>>,
}

impl OccupancyGrid {
    /// Tests every cell of the candidate rectangle, growing rows and cells
    /// on the way.
    fn fits(&mut self, x: usize, y: usize, width: usize, height: usize) -> bool {
        for row in y..y + height {
            while self.rows.len() <= row {
                self.rows.push(Vec::new());
            }
            let cells = &mut self.rows[row];
            for col in x..x + width {
                while cells.len() <= col {
                    cells.push(None);
                }
                if cells[col].is_some() {
                    return false;
                }
            }
        }
        true
    }

    /// Marks the rectangle as owned by `item`. Only valid after a
    /// successful [`Self::fits`] on the same rectangle.
    fn claim(&mut self, x: usize, y: usize, width: usize, height: usize, item: usize) {
        for row in y..y + height {
            for col in x..x + width {
                self.rows[row][col] = Some(item);
            }
        }
    }
}

/// The packer's scan position, shared across all items of one pass.
///
/// Advances only on placement failure; a successful placement leaves it in
/// place for the next item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cursor {
    x: usize,
    y: usize,
}

impl Cursor {
    fn advance(&mut self, columns: usize) {
        self.x += 1;
        if self.x >= columns {
            self.x = 0;
            self.y += 1;
        }
    }
}

/// Columns currently derivable from the container width:
/// `floor(width / (base_unit + gap))`, recomputed on every pass.
pub(crate) fn column_count(
    container_width: f64,
    base_unit: u32,
    gap: u32,
) -> Result<usize, LayoutError> {
    let unit = (base_unit as u64 + gap as u64) as f64;
    let ratio = container_width / unit;
    // truncation floors the ratio on this (positive) domain and, unlike
    // f64::floor, is available without std
    if ratio.is_finite() && ratio >= 1.0 {
        Ok(ratio as usize)
    } else {
        Err(LayoutError::NoColumns {
            width: container_width,
        })
    }
}

/// First-fit row-major packing of `items` into the grid implied by
/// `container_width`.
///
/// Returns one position per item, in item order. Later items can leave
/// holes above them that are never backfilled; the cursor only moves
/// forward. That is the engine's historical visual style and is kept over
/// a shortest-column heuristic on purpose.
pub(crate) fn pack<S>(
    items: &[MosaicItem<S>],
    container_width: f64,
    base_unit: u32,
    gap: u32,
) -> Result<Vec<Position>, LayoutError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let columns = column_count(container_width, base_unit, gap)?;

    // Anything that could make the scan loop forever is rejected before it
    // starts: an empty row accepts every pattern that survives this check.
    for item in items {
        let pattern = item.pattern;
        if pattern.width == 0 || pattern.height == 0 {
            return Err(LayoutError::ZeroPattern {
                width: pattern.width,
                height: pattern.height,
            });
        }
        if pattern.width as usize > columns {
            return Err(LayoutError::PatternTooWide {
                width: pattern.width,
                columns,
            });
        }
    }

    let unit = (base_unit as u64 + gap as u64) as f64;
    let mut grid = OccupancyGrid::default();
    let mut cursor = Cursor::default();
    let mut positions = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let width = item.pattern.width as usize;
        let height = item.pattern.height as usize;
        loop {
            if cursor.x + width <= columns && grid.fits(cursor.x, cursor.y, width, height) {
                grid.claim(cursor.x, cursor.y, width, height, index);
                positions.push(Position {
                    left: cursor.x as f64 * unit,
                    top: cursor.y as f64 * unit,
                    width: pixel_span(item.pattern.width, base_unit, gap),
                    height: pixel_span(item.pattern.height, base_unit, gap),
                });
                break;
            }
            cursor.advance(columns);
        }
    }

    mtrace!(
        items = items.len(),
        columns,
        rows = grid.rows.len(),
        "pack"
    );
    Ok(positions)
}

/// `cells * base_unit + (cells - 1) * gap`: the pixel extent of a span of
/// cells, gaps between them included.
fn pixel_span(cells: u32, base_unit: u32, gap: u32) -> f64 {
    (cells as u64 * base_unit as u64 + (cells as u64 - 1) * gap as u64) as f64
}
