//! A headless pattern-grid (masonry) layout and virtualization engine.
//!
//! For the pagination side (item providers, fetch gating), see the
//! `mosaic-adapter` crate.
//!
//! This crate positions a growing collection of rectangular items into a
//! cell grid: each item carries one of a small set of fixed aspect-ratio
//! patterns, a first-fit row-major scan packs them without overlap, and a
//! scroll-driven visibility pass picks the subset worth rendering.
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - container width (drives the column count)
//! - scroll offset and viewport height
//! - a render sink that materializes visuals keyed by item id
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod grid;
mod options;
mod pattern;
mod types;
mod viewport;


pub use engine::Mosaic;
pub use error::{LayoutError, RenderError};
pub use options::{LayoutUpdatedCallback, MosaicOptions, RenderCallback};
pub use pattern::{PatternTable, STANDARD_PATTERNS};
pub use types::{MosaicItem, Pattern, Position, SourceRef};
pub use viewport::Viewport;
