// this_file: crates/labelshape-core/src/bidi.rs

//! Bidi run resolver interface.
//!
//! Paragraph and run computation is delegated to an implementation of
//! [`BidiResolver`]. The shaper only needs two things from it: the
//! directional runs of a paragraph in visual order, and the visual order of
//! the glyphs of one wrapped line given their embedding levels.

use crate::types::Direction;
use std::ops::Range;

/// A run of text with a single embedding level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidiRun {
    /// Byte range in the original text
    pub range: Range<usize>,
    /// Embedding level (even = left-to-right, odd = right-to-left)
    pub level: u8,
}

impl BidiRun {
    pub fn new(range: Range<usize>, level: u8) -> Self {
        Self { range, level }
    }

    pub fn is_rtl(&self) -> bool {
        self.level % 2 == 1
    }

    pub fn direction(&self) -> Direction {
        if self.is_rtl() {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }
}

/// Resolves directional runs and line-level visual order.
///
/// Implementations must be pure: the same input always yields the same
/// output, with no shared mutable state.
pub trait BidiResolver: Send + Sync {
    /// Runs covering all of `text`, in visual order.
    fn resolve(&self, text: &str, base: Direction) -> Vec<BidiRun>;

    /// Visual-to-logical map for one line: `map[v]` is the logical index of
    /// the item drawn at visual position `v`.
    fn reorder_visual(&self, levels: &[u8]) -> Vec<usize>;

    /// Resolver name, for diagnostics
    fn name(&self) -> &str;
}

/// Resolver that performs no bidi analysis.
///
/// The whole text forms one run at the base level: right-to-left when the
/// base direction is [`Direction::RightToLeft`], left-to-right otherwise.
/// Since every level it produces is the same, reordering a line is either
/// the identity or a reversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalOrderResolver;

impl BidiResolver for LogicalOrderResolver {
    fn resolve(&self, text: &str, base: Direction) -> Vec<BidiRun> {
        if text.is_empty() {
            return Vec::new();
        }
        let level = match base {
            Direction::RightToLeft => 1,
            Direction::LeftToRight | Direction::Auto => 0,
        };
        vec![BidiRun::new(0..text.len(), level)]
    }

    fn reorder_visual(&self, levels: &[u8]) -> Vec<usize> {
        let rtl = levels.first().is_some_and(|level| level % 2 == 1);
        if rtl {
            (0..levels.len()).rev().collect()
        } else {
            (0..levels.len()).collect()
        }
    }

    fn name(&self) -> &str {
        "logical-order"
    }
}
