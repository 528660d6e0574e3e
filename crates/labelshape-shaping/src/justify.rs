// this_file: crates/labelshape-shaping/src/justify.rs

//! Justification and anchoring of wrapped lines.
//!
//! Lines arrive laid out from pen 0 along the inline axis. The justifier
//! places each line inside the block (`justify` weight, or full
//! justification), stacks lines, anchors the block with the alignment
//! fractions and finally applies `translate`.
//!
//! In vertical writing modes the inline axis runs down the screen and lines
//! become columns stacked right to left, `vertical_height` apart. Alignment
//! fractions always refer to screen axes: `horizontal_align` anchors across
//! columns and `vertical_align` along them.

use crate::shaper::UnwrappedGlyph;
use labelshape_core::{
    GlyphId, GlyphOrientation, LineMetrics, PositionedGlyph, Shaping, ShapingOptions, WritingMode,
};

/// A glyph placed on its line, before justification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LaidGlyph {
    pub glyph: GlyphId,
    /// Pen position along the inline axis
    pub inline: f32,
    pub orientation: GlyphOrientation,
    /// Trailing whitespace hanging outside the line width
    pub hanging: bool,
}

impl LaidGlyph {
    pub fn new(glyph: &UnwrappedGlyph, inline: f32, hanging: bool) -> Self {
        Self {
            glyph: glyph.glyph,
            inline,
            orientation: glyph.orientation,
            hanging,
        }
    }
}

/// One line in visual order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LineLayout {
    pub glyphs: Vec<LaidGlyph>,
    /// Visible width
    pub width: f32,
    /// The line ends with a paragraph separator
    pub ends_paragraph: bool,
}

/// Position every line and build the final shaping.
pub(crate) fn justify_lines(
    lines: Vec<LineLayout>,
    options: &ShapingOptions,
    writing_mode: WritingMode,
) -> Shaping {
    let line_count = lines.len();
    let vertical = writing_mode.is_vertical();
    let line_pitch = if vertical {
        options.vertical_height
    } else {
        options.line_height
    };
    let block_width = lines.iter().map(|line| line.width).fold(0.0, f32::max);
    let block_height = line_count as f32 * line_pitch;

    let (screen_width, screen_height) = if vertical {
        (block_height, block_width)
    } else {
        (block_width, block_height)
    };
    let left = -options.horizontal_align * screen_width;
    let top = -options.vertical_align * screen_height;
    let translate = options.translate;

    let mut glyphs = Vec::with_capacity(lines.iter().map(|line| line.glyphs.len()).sum());
    let mut metrics = Vec::with_capacity(line_count);

    for (index, line) in lines.into_iter().enumerate() {
        let is_last = index + 1 == line_count;
        let stretch = options.full_justify && !is_last && !line.ends_paragraph;
        let (offsets, width) = inline_offsets(&line, block_width, options.justify, stretch);

        // Across-line position: lines go down, columns go right to left.
        let line_position = if vertical {
            (line_count - 1 - index) as f32 * line_pitch
        } else {
            index as f32 * line_pitch
        };

        let start = glyphs.len();
        for (glyph, inline) in line.glyphs.iter().zip(offsets) {
            let (x, y) = if vertical {
                (left + line_position, top + inline)
            } else {
                (left + inline, top + line_position)
            };
            glyphs.push(PositionedGlyph::new(
                glyph.glyph,
                x + translate.x,
                y + translate.y,
                index,
                glyph.orientation,
            ));
        }
        metrics.push(LineMetrics {
            start,
            end: glyphs.len(),
            width,
        });
    }

    Shaping {
        glyphs,
        lines: metrics,
        top: top + translate.y,
        bottom: top + screen_height + translate.y,
        left: left + translate.x,
        right: left + screen_width + translate.x,
        writing_mode,
    }
}

/// Inline position of each glyph of `line` inside the block, and the line's
/// resulting visible width.
///
/// A stretched line takes `justify × slack` into its gaps; the slack left
/// over positions it with the same weight.
fn inline_offsets(line: &LineLayout, block_width: f32, justify: f32, stretch: bool) -> (Vec<f32>, f32) {
    let slack = block_width - line.width;
    let visible = line.glyphs.iter().filter(|glyph| !glyph.hanging).count();

    if stretch && visible > 1 && slack > 0.0 {
        let stretched = justify * slack;
        let gap = stretched / (visible - 1) as f32;
        let shift = justify * (slack - stretched);
        let mut extra = 0.0;
        let mut seen = 0;
        let offsets = line
            .glyphs
            .iter()
            .map(|glyph| {
                if glyph.hanging {
                    // Hanging glyphs left of the text stay put; right of it
                    // they follow the stretched line.
                    return glyph.inline + shift + extra;
                }
                extra = seen as f32 * gap;
                seen += 1;
                glyph.inline + shift + extra
            })
            .collect();
        return (offsets, line.width + stretched);
    }

    let shift = justify * slack;
    let offsets = line.glyphs.iter().map(|glyph| glyph.inline + shift).collect();
    (offsets, line.width)
}
