// this_file: crates/labelshape-shaping/src/test_support.rs

use labelshape_core::{GlyphId, GlyphMetrics, GlyphSet};

pub(crate) fn id(c: char) -> GlyphId {
    c as GlyphId
}

/// Glyph set with one glyph per character of `chars`, all sharing `advance`.
pub(crate) fn glyph_set(chars: &str, advance: u32) -> GlyphSet {
    chars
        .chars()
        .map(|c| {
            let metrics = if c.is_whitespace() {
                GlyphMetrics::with_advance(advance)
            } else {
                GlyphMetrics::new(advance, advance, 0, advance as i32, advance)
            };
            (id(c), metrics)
        })
        .collect()
}
