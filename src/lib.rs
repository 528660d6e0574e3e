// this_file: src/lib.rs

//! labelshape - layout of SDF map label text.
//!
//! Given a frozen [`GlyphSet`] of SDF glyph metrics, labelshape turns label
//! text into positioned glyphs: bidi runs are resolved, the text is wrapped
//! greedily (or balanced for ideographic scripts), and lines are justified
//! and anchored for horizontal or vertical writing.
//!
//! ```
//! use labelshape::{shape, GlyphMetrics, GlyphSet, ShapingOptions};
//!
//! let glyphs: GlyphSet = "AB CD EF"
//!     .chars()
//!     .map(|c| (c as u32, GlyphMetrics::with_advance(10)))
//!     .collect();
//! let options = ShapingOptions { max_width: 50.0, ..Default::default() };
//! let shaping = shape(&glyphs, "AB CD EF", &options);
//! assert_eq!(shaping.line_count(), 2);
//! ```

pub use labelshape_core::*;
pub use labelshape_shaping::{
    determine_line_breaks, line_wrap, BatchItem, BatchResult, BatchShaper, BreakOpportunity,
    Shaper, UnwrappedGlyph, UnwrappedShaping,
};
pub use labelshape_unicode::{ScriptClassifier, UnicodeBidiResolver};

pub mod unicode {
    //! Character classes and script detection.
    pub use labelshape_unicode::i18n::*;
    pub use labelshape_unicode::script::*;
}

/// Shape `text` with the Unicode bidi resolver.
pub fn shape(glyphs: &GlyphSet, text: &str, options: &ShapingOptions) -> Shaping {
    Shaper::new(glyphs, &UnicodeBidiResolver).get_shaping(text, options)
}
