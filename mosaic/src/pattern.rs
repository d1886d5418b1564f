use alloc::vec::Vec;

use crate::{LayoutError, Pattern};

/// The default table: horizontal rectangle, vertical rectangle, large
/// square, small square.
pub const STANDARD_PATTERNS: [Pattern; 4] = [
    Pattern::new(2, 1),
    Pattern::new(1, 2),
    Pattern::new(2, 2),
    Pattern::new(1, 1),
];

/// A fixed, ordered set of patterns cycled over the items of one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
}

impl PatternTable {
    /// Builds a table from an ordered set of patterns.
    ///
    /// Rejects empty tables and zero-dimension patterns; both would break
    /// the packer's termination guarantee.
    pub fn new(patterns: impl Into<Vec<Pattern>>) -> Result<Self, LayoutError> {
        let patterns = patterns.into();
        if patterns.is_empty() {
            return Err(LayoutError::EmptyPatternTable);
        }
        for pattern in &patterns {
            if pattern.width == 0 || pattern.height == 0 {
                return Err(LayoutError::ZeroPattern {
                    width: pattern.width,
                    height: pattern.height,
                });
            }
        }
        Ok(Self { patterns })
    }

    /// Cyclic assignment by position within one fetched page.
    ///
    /// Pure and stateless: `table[index % len]`. The index is the position
    /// within one page, not a running global index, so successive pages
    /// restart the cycle at the first pattern.
    pub fn assign(&self, index_within_page: usize) -> Pattern {
        self.patterns[index_within_page % self.patterns.len()]
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Widest pattern in the table, in cells. The container must be at
    /// least this many columns wide for packing to succeed.
    pub fn max_width(&self) -> u32 {
        self.patterns.iter().map(|p| p.width).max().unwrap_or(0)
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self {
            patterns: STANDARD_PATTERNS.to_vec(),
        }
    }
}
