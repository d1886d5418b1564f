use alloc::string::String;

use thiserror::Error;

/// Configuration failures, surfaced before any packing scan runs.
///
/// Packing and visibility computation over validated inputs never fail;
/// anything that could make the scan loop forever is rejected up front.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    #[error("base unit must be at least one pixel")]
    InvalidBaseUnit,
    #[error("gap must be at least one pixel")]
    InvalidGap,
    #[error("pattern table must not be empty")]
    EmptyPatternTable,
    #[error("pattern {width}x{height} has a zero dimension")]
    ZeroPattern { width: u32, height: u32 },
    /// The container is narrower than one cell, so no column exists to
    /// place anything in.
    #[error("container width {width}px yields no usable columns")]
    NoColumns { width: f64 },
    /// An item's pattern can never satisfy the row-overflow check; without
    /// this error the scan would walk the grid forever.
    #[error("pattern width {width} exceeds the {columns} available columns")]
    PatternTooWide { width: u32, columns: usize },
}

/// A recoverable failure reported by a render sink for a single item.
///
/// The engine logs the failure and moves on; other items in the pass are
/// unaffected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("render failed: {reason}")]
pub struct RenderError {
    pub reason: String,
}

impl RenderError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
