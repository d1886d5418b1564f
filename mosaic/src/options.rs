use alloc::sync::Arc;

use crate::{LayoutError, MosaicItem, PatternTable, Position, RenderError, SourceRef};

/// Render sink: invoked once per visible item per layout pass.
///
/// Consumers create-or-update a visual keyed by `item.id`. No callback is
/// made for items that left the viewport; the consumer reconciles stale
/// visuals against the ids emitted during the pass.
///
/// Returning an error skips that single item; the rest of the pass is
/// unaffected.
pub type RenderCallback<S = SourceRef> =
    Arc<dyn Fn(&MosaicItem<S>, Position) -> Result<(), RenderError> + Send + Sync>;

/// Layout-updated sink: invoked exactly once per layout pass with the new
/// total content height, so the consumer can resize its scroll container.
pub type LayoutUpdatedCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Configuration for [`crate::Mosaic`]. Immutable after engine
/// construction.
pub struct MosaicOptions<S = SourceRef> {
    /// Edge length of one grid cell, in pixels.
    pub base_unit: u32,
    /// Spacing between cells, in pixels. Feeds both the column-count
    /// derivation and the pixel offsets.
    pub gap: u32,
    /// Items requested per fetch. Owned by the provider side; the engine
    /// only passes it through.
    pub page_size: usize,
    /// Extra margin above and below the viewport before an item stops
    /// counting as visible. Trades render churn against off-screen
    /// pre-rendering.
    pub virtualize_buffer: u32,
    /// Ordered pattern templates cycled over each fetched page.
    pub patterns: PatternTable,
    pub on_render: Option<RenderCallback<S>>,
    pub on_layout_updated: Option<LayoutUpdatedCallback>,
}

impl<S> MosaicOptions<S> {
    /// Engine defaults: 200 px cells, 10 px gap, 24-item pages, 2000 px
    /// virtualization buffer, the standard pattern table.
    pub fn new() -> Self {
        Self {
            base_unit: 200,
            gap: 10,
            page_size: 24,
            virtualize_buffer: 2000,
            patterns: PatternTable::default(),
            on_render: None,
            on_layout_updated: None,
        }
    }

    pub fn with_base_unit(mut self, base_unit: u32) -> Self {
        self.base_unit = base_unit;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_virtualize_buffer(mut self, virtualize_buffer: u32) -> Self {
        self.virtualize_buffer = virtualize_buffer;
        self
    }

    pub fn with_patterns(mut self, patterns: PatternTable) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_on_render(
        mut self,
        f: impl Fn(&MosaicItem<S>, Position) -> Result<(), RenderError> + Send + Sync + 'static,
    ) -> Self {
        self.on_render = Some(Arc::new(f));
        self
    }

    pub fn with_on_layout_updated(mut self, f: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.on_layout_updated = Some(Arc::new(f));
        self
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        if self.base_unit == 0 {
            return Err(LayoutError::InvalidBaseUnit);
        }
        if self.gap == 0 {
            return Err(LayoutError::InvalidGap);
        }
        Ok(())
    }
}

impl<S> Default for MosaicOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for MosaicOptions<S> {
    fn clone(&self) -> Self {
        Self {
            base_unit: self.base_unit,
            gap: self.gap,
            page_size: self.page_size,
            virtualize_buffer: self.virtualize_buffer,
            patterns: self.patterns.clone(),
            on_render: self.on_render.clone(),
            on_layout_updated: self.on_layout_updated.clone(),
        }
    }
}

impl<S> core::fmt::Debug for MosaicOptions<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MosaicOptions")
            .field("base_unit", &self.base_unit)
            .field("gap", &self.gap)
            .field("page_size", &self.page_size)
            .field("virtualize_buffer", &self.virtualize_buffer)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
