// this_file: crates/labelshape-core/src/utils.rs

//! Utility functions for the labelshape layout engine.

use crate::glyph_set::GlyphSet;
use crate::types::{BoundingBox, GlyphOrientation, PositionedGlyph};

/// Quantize a layout value for cache key generation
pub fn quantize(value: f32) -> i32 {
    (value * 100.0).round() as i32
}

/// Calculate the ink bounding box of positioned glyphs from their bitmap
/// metrics. Rotated glyphs have their box swapped around the pen position.
pub fn ink_bounds(glyphs: &[PositionedGlyph], set: &GlyphSet) -> BoundingBox {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;

    for glyph in glyphs {
        let Some(metrics) = set.get(glyph.glyph) else {
            continue;
        };
        if metrics.width == 0 || metrics.height == 0 {
            continue;
        }
        let (x0, y0, w, h) = match glyph.orientation {
            GlyphOrientation::Rotated => (
                glyph.x - metrics.top as f32,
                glyph.y + metrics.left as f32,
                metrics.height as f32,
                metrics.width as f32,
            ),
            GlyphOrientation::Horizontal | GlyphOrientation::Upright => (
                glyph.x + metrics.left as f32,
                glyph.y - metrics.top as f32,
                metrics.width as f32,
                metrics.height as f32,
            ),
        };
        min_x = min_x.min(x0);
        min_y = min_y.min(y0);
        max_x = max_x.max(x0 + w);
        max_y = max_y.max(y0 + h);
    }

    if min_x > max_x {
        return BoundingBox::default();
    }

    BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GlyphMetrics;

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(12.5), 1250);
        assert_eq!(quantize(-0.004), 0);
        assert_eq!(quantize(24.0), 2400);
    }

    #[test]
    fn test_ink_bounds() {
        let set: GlyphSet = [
            (65, GlyphMetrics::new(10, 12, 1, 10, 11)),
            (32, GlyphMetrics::with_advance(6)),
        ]
        .into_iter()
        .collect();
        let glyphs = vec![
            PositionedGlyph::new(65, 0.0, 0.0, 0, GlyphOrientation::Horizontal),
            PositionedGlyph::new(32, 11.0, 0.0, 0, GlyphOrientation::Horizontal),
            PositionedGlyph::new(65, 17.0, 0.0, 0, GlyphOrientation::Horizontal),
        ];

        let bbox = ink_bounds(&glyphs, &set);
        assert_eq!(bbox.x, 1.0);
        assert_eq!(bbox.y, -10.0);
        assert_eq!(bbox.width, 27.0);
        assert_eq!(bbox.height, 12.0);
    }

    #[test]
    fn test_ink_bounds_without_ink() {
        let set = GlyphSet::default();
        let glyphs = vec![PositionedGlyph::new(9, 0.0, 0.0, 0, GlyphOrientation::Horizontal)];
        assert_eq!(ink_bounds(&glyphs, &set), BoundingBox::default());
    }
}
