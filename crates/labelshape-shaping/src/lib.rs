// this_file: crates/labelshape-shaping/src/lib.rs

//! Label shaping pipeline: shaper, line breaker and justifier, plus a rayon
//! batch driver.
//!
//! ```
//! use labelshape_core::{GlyphMetrics, GlyphSet, ShapingOptions};
//! use labelshape_shaping::Shaper;
//! use labelshape_unicode::UnicodeBidiResolver;
//!
//! let glyphs: GlyphSet = "Main Street"
//!     .chars()
//!     .map(|c| (c as u32, GlyphMetrics::with_advance(12)))
//!     .collect();
//! let shaping = Shaper::new(&glyphs, &UnicodeBidiResolver).get_shaping("Main Street", &ShapingOptions::default());
//! assert!(shaping.is_valid());
//! assert_eq!(shaping.line_count(), 1);
//! ```

pub mod batch;
mod justify;
pub mod line_breaker;
pub mod shaper;

#[cfg(test)]
mod test_support;

pub use batch::{BatchItem, BatchResult, BatchShaper};
pub use line_breaker::{determine_line_breaks, line_wrap};
pub use shaper::{BreakOpportunity, Shaper, UnwrappedGlyph, UnwrappedShaping};
