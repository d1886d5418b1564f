use alloc::string::String;

/// A fixed aspect-ratio template, in grid cells, assigned to an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    /// Width in grid cells.
    pub width: u32,
    /// Height in grid cells.
    pub height: u32,
}

impl Pattern {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Default payload handle: a path or URL to the item's image.
///
/// The engine never dereferences it; decode and display belong to the
/// render collaborator.
pub type SourceRef = String;

/// One rectangular item tracked by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicItem<S = SourceRef> {
    /// Unique within the lifetime of one item sequence. Duplicates are not
    /// checked.
    pub id: String,
    pub pattern: Pattern,
    /// Opaque payload handle, handed through to the render sink untouched.
    pub source: S,
    /// Whether the last layout pass evaluated this item as visible.
    pub visible: bool,
}

impl<S> MosaicItem<S> {
    pub fn new(id: impl Into<String>, pattern: Pattern, source: S) -> Self {
        Self {
            id: id.into(),
            pattern,
            source,
            visible: false,
        }
    }
}

/// Pixel-space placement of one item.
///
/// Derived state: recomputed on every layout pass, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Position {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
