// this_file: crates/labelshape-shaping/src/shaper.rs

//! The shaper turns label text into an unwrapped glyph sequence.
//!
//! Text is split into directional runs by the injected [`BidiResolver`];
//! runs are laid out in visual order with right-to-left runs emitted in
//! reverse, so the resulting sequence always reads left to right on screen.
//! Every glyph remembers its logical position, embedding level and the break
//! opportunity that follows it, which is all the line breaker needs to wrap
//! the same unwrapped sequence at any width.

use crate::line_breaker;
use labelshape_core::{
    BidiResolver, Direction, GlyphId, GlyphOrientation, GlyphSet, Shaping, ShapingDiagnostics,
    ShapingOptions, WritingMode,
};
use labelshape_unicode::{
    allows_ideographic_breaking, allows_word_breaking, is_mandatory_break, is_whitespace,
    vertical_orientation, verticalize_punctuation, ScriptClassifier,
};
use std::borrow::Cow;

/// Line-break opportunity after a glyph, in logical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BreakOpportunity {
    #[default]
    None,
    /// A line may end after this glyph
    Allowed,
    /// A line must end after this glyph when wrapping
    Mandatory,
}

impl BreakOpportunity {
    fn after(c: char, is_last: bool) -> Self {
        if is_last {
            Self::None
        } else if is_mandatory_break(c) {
            Self::Mandatory
        } else if allows_word_breaking(c) || allows_ideographic_breaking(c) {
            Self::Allowed
        } else {
            Self::None
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One glyph of an [`UnwrappedShaping`].
#[derive(Debug, Clone, PartialEq)]
pub struct UnwrappedGlyph {
    /// Glyph ID in the glyph set
    pub glyph: GlyphId,
    /// Character the glyph was shaped from
    pub code_point: char,
    /// Pen position along the single unwrapped line
    pub x: f32,
    /// Inline advance, zero for glyphs missing from the set
    pub advance: f32,
    /// Index of the character in the (possibly verticalized) text
    pub logical_index: usize,
    /// Bidi embedding level
    pub level: u8,
    pub orientation: GlyphOrientation,
    pub whitespace: bool,
    pub break_after: BreakOpportunity,
}

/// Glyphs of a label laid out on one unbounded line, in visual order.
///
/// This is the input of [`line_wrap`](crate::line_wrap). It is never mutated
/// by wrapping, so one unwrapped shaping can be wrapped at several widths.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwrappedShaping {
    pub glyphs: Vec<UnwrappedGlyph>,
    pub writing_mode: WritingMode,
    /// Paragraph embedding level
    pub base_level: u8,
    /// Whether the text is predominantly ideographic
    pub ideographic: bool,
    /// Total pen advance, spacing included
    pub width: f32,
}

impl UnwrappedShaping {
    fn empty(writing_mode: WritingMode, base_level: u8) -> Self {
        Self {
            glyphs: Vec::new(),
            writing_mode,
            base_level,
            ideographic: false,
            width: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether the paragraph direction is right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.base_level % 2 == 1
    }

    /// Glyphs sorted back into logical order.
    pub fn logical_order(&self) -> Vec<&UnwrappedGlyph> {
        let mut glyphs: Vec<&UnwrappedGlyph> = self.glyphs.iter().collect();
        glyphs.sort_by_key(|glyph| glyph.logical_index);
        glyphs
    }
}

/// Shapes label text against one glyph set.
///
/// A shaper borrows its glyph set and resolver and holds no other state, so
/// it is cheap to create per call and safe to use from many threads at once.
pub struct Shaper<'a> {
    glyphs: &'a GlyphSet,
    resolver: &'a dyn BidiResolver,
    scripts: ScriptClassifier,
}

impl<'a> Shaper<'a> {
    pub fn new(glyphs: &'a GlyphSet, resolver: &'a dyn BidiResolver) -> Self {
        Self {
            glyphs,
            resolver,
            scripts: ScriptClassifier::new(),
        }
    }

    /// Shape, wrap and justify `text`.
    pub fn get_shaping(&self, text: &str, options: &ShapingOptions) -> Shaping {
        let unwrapped = self.shape_unwrapped(text, options);
        let shaping = self.line_wrap(&unwrapped, options);
        ShapingDiagnostics::new(self.resolver.name(), text, options, &shaping).log();
        shaping
    }

    /// Wrap a previously shaped sequence; see [`line_wrap`](crate::line_wrap).
    pub fn line_wrap(&self, unwrapped: &UnwrappedShaping, options: &ShapingOptions) -> Shaping {
        line_breaker::line_wrap(unwrapped, options, self.resolver)
    }

    /// Lay `text` out on a single unbounded line in visual order.
    pub fn shape_unwrapped(&self, text: &str, options: &ShapingOptions) -> UnwrappedShaping {
        let writing_mode = options.writing_mode;
        let text: Cow<'_, str> = if writing_mode.is_vertical() {
            Cow::Owned(verticalize_punctuation(text, |c| {
                self.glyphs.contains(c as GlyphId)
            }))
        } else {
            Cow::Borrowed(text)
        };

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let runs = self.resolver.resolve(&text, options.direction);
        let base_level = match options.direction {
            Direction::LeftToRight => 0,
            Direction::RightToLeft => 1,
            Direction::Auto => runs.iter().map(|run| run.level).min().unwrap_or(0) % 2,
        };
        if chars.is_empty() {
            return UnwrappedShaping::empty(writing_mode, base_level);
        }

        // Visual order of characters as (logical index, level).
        let mut placed = vec![false; chars.len()];
        let mut order = Vec::with_capacity(chars.len());
        for run in &runs {
            let start = chars.partition_point(|&(byte, _)| byte < run.range.start);
            let end = chars.partition_point(|&(byte, _)| byte < run.range.end);
            let mut indices: Vec<usize> = (start..end).filter(|&i| !placed[i]).collect();
            if run.is_rtl() {
                indices.reverse();
            }
            for index in indices {
                placed[index] = true;
                order.push((index, run.level));
            }
        }
        // Characters a resolver left uncovered keep logical order.
        for (index, _) in placed.iter().enumerate().filter(|(_, placed)| !**placed) {
            order.push((index, base_level));
        }

        let mut pen = 0.0;
        let glyphs: Vec<UnwrappedGlyph> = order
            .into_iter()
            .map(|(logical_index, level)| {
                let code_point = chars[logical_index].1;
                let is_last = logical_index + 1 == chars.len();
                let glyph = self.shape_glyph(code_point, logical_index, level, is_last, pen, options);
                pen += glyph.advance + options.spacing;
                glyph
            })
            .collect();

        UnwrappedShaping {
            glyphs,
            writing_mode,
            base_level,
            ideographic: self.scripts.is_predominantly_ideographic(&text),
            width: pen,
        }
    }

    fn shape_glyph(
        &self,
        code_point: char,
        logical_index: usize,
        level: u8,
        is_last: bool,
        x: f32,
        options: &ShapingOptions,
    ) -> UnwrappedGlyph {
        let glyph = code_point as GlyphId;
        let orientation = match options.writing_mode {
            WritingMode::Horizontal => GlyphOrientation::Horizontal,
            WritingMode::Vertical => vertical_orientation(code_point),
            WritingMode::VerticalUpright => GlyphOrientation::Upright,
        };
        let advance = match self.glyphs.get(glyph) {
            None => {
                log::trace!(
                    target: "labelshape::shape",
                    "glyph {glyph} ({code_point:?}) missing, using zero-advance placeholder"
                );
                0.0
            }
            Some(_) if orientation == GlyphOrientation::Upright => options.vertical_height,
            Some(metrics) => metrics.advance as f32,
        };

        UnwrappedGlyph {
            glyph,
            code_point,
            x,
            advance,
            logical_index,
            level,
            orientation,
            whitespace: is_whitespace(code_point),
            break_after: BreakOpportunity::after(code_point, is_last),
        }
    }
}
