//! Pagination utilities for the `mosaic` crate.
//!
//! The `mosaic` engine is headless and never fetches data. This crate holds
//! the collaborator half of that contract:
//!
//! - [`ItemProvider`]: the paged data-source boundary
//! - [`Pager`]: the single owner of `is_loading`/`has_more`, fetch gating,
//!   and scroll-driven prefetch
//!
//! This crate is intentionally framework-agnostic (no UI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod pager;
mod provider;

#[cfg(test)]
mod tests;

pub use pager::{LoadOutcome, Pager, PagerError};
pub use provider::{ItemProvider, PageItem, ProviderError, page_item_id};
