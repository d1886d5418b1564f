use alloc::vec::Vec;
use core::fmt;

use crate::viewport::{self, Viewport};
use crate::{LayoutError, MosaicItem, MosaicOptions, Position, SourceRef, grid};

/// The layout engine: owns the item sequence and container geometry,
/// re-packs on every mutation, and emits render and layout-updated
/// callbacks for the visible subset.
///
/// Every mutating operation takes `&mut self` and re-derives the full
/// layout synchronously; there is no incremental re-layout. Virtualization
/// keeps the live item count small, so a full pass stays cheap at the
/// expected scale (tens to low hundreds of visible items).
///
/// The engine holds no pagination state. `is_loading`/`has_more` belong to
/// whoever fetches pages (see the `mosaic-adapter` crate); the engine only
/// ever sees the items it was handed.
#[derive(Clone)]
pub struct Mosaic<S = SourceRef> {
    options: MosaicOptions<S>,
    items: Vec<MosaicItem<S>>,
    positions: Vec<Position>,
    container_width: f64,
    container_height: f64,
    viewport: Viewport,
}

impl<S> Mosaic<S> {
    /// Creates an engine from options.
    ///
    /// Fails fast on degenerate configuration; a zero base unit or gap
    /// would make every later column-count derivation meaningless.
    pub fn new(options: MosaicOptions<S>) -> Result<Self, LayoutError> {
        options.validate()?;
        mdebug!(
            base_unit = options.base_unit,
            gap = options.gap,
            virtualize_buffer = options.virtualize_buffer,
            "Mosaic::new"
        );
        Ok(Self {
            options,
            items: Vec::new(),
            positions: Vec::new(),
            container_width: 0.0,
            container_height: 0.0,
            viewport: Viewport::default(),
        })
    }

    pub fn options(&self) -> &MosaicOptions<S> {
        &self.options
    }

    pub fn items(&self) -> &[MosaicItem<S>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total content height as of the last pass: `max(top + height) + gap`
    /// over placed items, `0` with no items.
    pub fn content_height(&self) -> f64 {
        self.container_height
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// The viewport recorded by the last [`Self::layout`] call. Re-layouts
    /// triggered by other mutations re-virtualize against it.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Columns derivable from the current container width, zero before the
    /// first size update.
    pub fn column_count(&self) -> usize {
        grid::column_count(self.container_width, self.options.base_unit, self.options.gap)
            .unwrap_or(0)
    }

    /// Placement of the item at `index` in the sequence, if the last pass
    /// produced one.
    pub fn position(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Largest scroll offset that still fills a viewport of the given
    /// height.
    pub fn max_scroll_offset(&self, viewport_height: f64) -> f64 {
        (self.container_height - viewport_height).max(0.0)
    }

    /// Appends items to the sequence (order preserved, ids unchecked) and
    /// re-derives the layout over the entire sequence.
    pub fn add_items(
        &mut self,
        new_items: impl IntoIterator<Item = MosaicItem<S>>,
    ) -> Result<(), LayoutError> {
        self.items.extend(new_items);
        mdebug!(total = self.items.len(), "add_items");
        self.relayout()
    }

    /// Stores new container dimensions and re-derives the layout.
    ///
    /// Rejects a width narrower than one cell without touching the stored
    /// geometry, so a bad resize event cannot wedge the engine.
    pub fn update_container_size(&mut self, width: f64, height: f64) -> Result<(), LayoutError> {
        grid::column_count(width, self.options.base_unit, self.options.gap)?;
        self.container_width = width;
        self.container_height = height;
        mdebug!(width, height, "update_container_size");
        self.relayout()
    }

    /// Records the viewport, then re-runs packing and the visibility pass,
    /// emitting the render and layout-updated callbacks.
    pub fn layout(&mut self, scroll_offset: f64, viewport_height: f64) -> Result<(), LayoutError> {
        self.viewport = Viewport::new(scroll_offset, viewport_height);
        self.relayout()
    }

    /// Empties the item sequence and runs one pass over it, emitting a
    /// single layout-updated callback carrying `0`.
    ///
    /// A subsequent [`Self::add_items`] with the same items reproduces the
    /// layout of a fresh engine.
    pub fn clear(&mut self) {
        mdebug!(dropped = self.items.len(), "clear");
        self.items.clear();
        self.positions.clear();
        self.run_pass();
    }

    /// Calls `f` for every item the last pass evaluated as visible, in
    /// sequence order. Zero-allocation counterpart of
    /// [`Self::collect_visible_indexes`].
    pub fn for_each_visible(&self, mut f: impl FnMut(&MosaicItem<S>, Position)) {
        for (item, position) in self.items.iter().zip(&self.positions) {
            if item.visible {
                f(item, *position);
            }
        }
    }

    /// Collects the sequence indexes of currently visible items into `out`
    /// (clears `out` first).
    pub fn collect_visible_indexes(&self, out: &mut Vec<usize>) {
        out.clear();
        for (index, item) in self.items.iter().enumerate() {
            if item.visible && index < self.positions.len() {
                out.push(index);
            }
        }
    }

    /// One full pass: pack the entire sequence, then virtualize and emit.
    fn relayout(&mut self) -> Result<(), LayoutError> {
        self.positions = grid::pack(
            &self.items,
            self.container_width,
            self.options.base_unit,
            self.options.gap,
        )?;
        self.run_pass();
        Ok(())
    }

    /// Visibility pass over the current positions. Infallible: a failing
    /// render sink is logged and skipped for that item only.
    fn run_pass(&mut self) {
        let (band_top, band_bottom) = self.viewport.band(self.options.virtualize_buffer);

        for (item, position) in self.items.iter_mut().zip(self.positions.iter()) {
            let visible = viewport::is_visible(position, band_top, band_bottom);
            item.visible = visible;
            if visible {
                if let Some(on_render) = &self.options.on_render {
                    if let Err(_err) = on_render(item, *position) {
                        mwarn!(id = %item.id, err = %_err, "render sink failed, skipping item");
                    }
                }
            }
        }

        self.container_height = viewport::content_height(&self.positions, self.options.gap);
        mtrace!(
            items = self.items.len(),
            content_height = self.container_height,
            "layout pass"
        );
        if let Some(on_layout_updated) = &self.options.on_layout_updated {
            on_layout_updated(self.container_height);
        }
    }
}

impl<S> fmt::Debug for Mosaic<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mosaic")
            .field("options", &self.options)
            .field("items", &self.items.len())
            .field("container_width", &self.container_width)
            .field("container_height", &self.container_height)
            .field("viewport", &self.viewport)
            .finish()
    }
}
