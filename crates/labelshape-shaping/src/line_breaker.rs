// this_file: crates/labelshape-shaping/src/line_breaker.rs

//! Line breaking.
//!
//! Breaks are chosen in logical order over the break opportunities the
//! shaper recorded. Two strategies are available:
//!
//! - greedy: fill each line until the next glyph would overflow, then end the
//!   line at the last opportunity seen;
//! - balanced: estimate the line count, then pick the set of breaks whose
//!   line widths deviate least from the average (used for ideographic text,
//!   where greedy filling leaves a lopsided short last line).
//!
//! Mandatory breaks split the text into paragraphs that are broken
//! independently. Trailing whitespace never counts towards a line's width.
//! Each line is then reordered visually and handed to the justifier.

use crate::justify::{self, LaidGlyph, LineLayout};
use crate::shaper::{BreakOpportunity, UnwrappedGlyph, UnwrappedShaping};
use labelshape_core::{BidiResolver, Shaping, ShapingOptions};

/// Penalty for ending a line on an opening bracket or starting one with a
/// closing bracket.
const BRACKET_PENALTY: f32 = 50.0;

/// Wrap an unwrapped shaping into lines and position them.
///
/// `unwrapped` is only read; the result is a new [`Shaping`]. Wrapping the
/// same unwrapped shaping with different options is cheap and never
/// influences earlier results.
pub fn line_wrap(
    unwrapped: &UnwrappedShaping,
    options: &ShapingOptions,
    resolver: &dyn BidiResolver,
) -> Shaping {
    if unwrapped.is_empty() {
        return Shaping::invalid(options.translate, unwrapped.writing_mode);
    }

    let logical = unwrapped.logical_order();
    let balanced = options.balanced_breaking.unwrap_or(true) && unwrapped.ideographic;
    let ends = determine_line_breaks(&logical, options, balanced);
    log::debug!(
        target: "labelshape::wrap",
        "wrapped {} glyphs into {} lines (strategy={}, max_width={:.1})",
        logical.len(),
        ends.len(),
        if balanced { "balanced" } else { "greedy" },
        options.max_width
    );

    let mut start = 0;
    let lines: Vec<LineLayout> = ends
        .iter()
        .map(|&end| {
            let line = layout_line(&logical[start..end], unwrapped.is_rtl(), options.spacing, resolver);
            start = end;
            line
        })
        .collect();

    justify::justify_lines(lines, options, unwrapped.writing_mode)
}

/// Logical end index (exclusive) of every line. The last entry is always
/// `glyphs.len()`.
pub fn determine_line_breaks(
    glyphs: &[&UnwrappedGlyph],
    options: &ShapingOptions,
    balanced: bool,
) -> Vec<usize> {
    if !options.wraps() || glyphs.is_empty() {
        return vec![glyphs.len()];
    }

    let measure = Measure::new(glyphs, options.spacing);
    let mut breaks = Vec::new();
    let mut start = 0;
    for end in paragraph_ends(glyphs) {
        if balanced {
            balanced_breaks(&measure, start, end, options.max_width, &mut breaks);
        } else {
            greedy_breaks(&measure, start, end, options.max_width, &mut breaks);
        }
        start = end;
    }
    breaks
}

fn paragraph_ends(glyphs: &[&UnwrappedGlyph]) -> Vec<usize> {
    let mut ends: Vec<usize> = glyphs
        .iter()
        .enumerate()
        .filter(|(_, glyph)| glyph.break_after == BreakOpportunity::Mandatory)
        .map(|(i, _)| i + 1)
        .collect();
    if ends.last() != Some(&glyphs.len()) {
        ends.push(glyphs.len());
    }
    ends
}

/// Prefix sums of pen advances over glyphs in logical order.
struct Measure<'a> {
    glyphs: &'a [&'a UnwrappedGlyph],
    prefix: Vec<f32>,
    spacing: f32,
}

impl<'a> Measure<'a> {
    fn new(glyphs: &'a [&'a UnwrappedGlyph], spacing: f32) -> Self {
        let mut prefix = Vec::with_capacity(glyphs.len() + 1);
        let mut sum = 0.0;
        prefix.push(sum);
        for glyph in glyphs {
            sum += glyph.advance + spacing;
            prefix.push(sum);
        }
        Self { glyphs, prefix, spacing }
    }

    /// Width of `start..end` with trailing whitespace excluded. Spacing sits
    /// between glyphs, so none follows the last visible one.
    fn width(&self, start: usize, end: usize) -> f32 {
        let mut visible_end = end;
        while visible_end > start && self.glyphs[visible_end - 1].whitespace {
            visible_end -= 1;
        }
        if visible_end == start {
            return 0.0;
        }
        self.prefix[visible_end] - self.prefix[start] - self.spacing
    }

    fn can_break_after(&self, index: usize) -> bool {
        self.glyphs[index].break_after.is_break()
    }

    /// Penalty for a break between glyphs `at - 1` and `at`.
    fn penalty(&self, at: usize) -> f32 {
        let mut penalty = 0.0;
        if matches!(self.glyphs[at - 1].code_point, '(' | '（') {
            penalty += BRACKET_PENALTY;
        }
        if matches!(self.glyphs.get(at).map(|g| g.code_point), Some(')' | '）')) {
            penalty += BRACKET_PENALTY;
        }
        penalty
    }
}

fn greedy_breaks(measure: &Measure<'_>, start: usize, end: usize, max_width: f32, breaks: &mut Vec<usize>) {
    let mut line_start = start;
    let mut candidate = None;
    for i in start..end {
        if measure.width(line_start, i + 1) > max_width {
            // Without a candidate the word is wider than the line and
            // overflows on its own.
            if let Some(at) = candidate.take() {
                breaks.push(at);
                line_start = at;
            }
        }
        if i + 1 < end && measure.can_break_after(i) {
            candidate = Some(i + 1);
        }
    }
    breaks.push(end);
}

/// Accumulated cost of a partial partition. Overflow beyond `max_width` is
/// compared first, so a balanced layout never trades the width bound for
/// evenness.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Cost {
    overflow: f32,
    badness: f32,
}

impl Cost {
    const ZERO: Cost = Cost {
        overflow: 0.0,
        badness: 0.0,
    };

    fn with_line(self, width: f32, target: f32, max_width: f32, penalty: f32, is_last: bool) -> Self {
        Self {
            overflow: self.overflow + (width - max_width).max(0.0),
            badness: self.badness + line_badness(width, target, penalty, is_last),
        }
    }
}

fn line_badness(width: f32, target: f32, penalty: f32, is_last: bool) -> f32 {
    let raggedness = (width - target).powi(2);
    if is_last {
        // A short last line reads better than a long one.
        return if width < target {
            raggedness / 2.0
        } else {
            raggedness * 2.0
        };
    }
    raggedness + penalty * penalty
}

fn balanced_breaks(measure: &Measure<'_>, start: usize, end: usize, max_width: f32, breaks: &mut Vec<usize>) {
    let total = measure.width(start, end);
    let line_count = (total / max_width).ceil().max(1.0);
    let target = total / line_count;

    let mut candidates = vec![start];
    candidates.extend((start..end.saturating_sub(1)).filter(|&i| measure.can_break_after(i)).map(|i| i + 1));
    candidates.push(end);

    // best[j] = cheapest partition ending at candidates[j], and its prior break
    let mut best: Vec<(Cost, usize)> = Vec::with_capacity(candidates.len());
    best.push((Cost::ZERO, 0));
    for j in 1..candidates.len() {
        let at = candidates[j];
        let is_last = j + 1 == candidates.len();
        let penalty = if is_last { 0.0 } else { measure.penalty(at) };

        // Strict comparison keeps the earliest prior break on ties.
        let choice = (0..j)
            .map(|k| {
                let width = measure.width(candidates[k], at);
                (best[k].0.with_line(width, target, max_width, penalty, is_last), k)
            })
            .reduce(|chosen, next| if next.0 < chosen.0 { next } else { chosen });
        best.push(choice.unwrap_or((Cost::ZERO, 0)));
    }

    let mut line_ends = Vec::new();
    let mut j = candidates.len() - 1;
    while j > 0 {
        line_ends.push(candidates[j]);
        j = best[j].1;
    }
    line_ends.reverse();
    log::trace!(
        target: "labelshape::wrap",
        "balanced paragraph {start}..{end}: target={target:.1} breaks={line_ends:?}"
    );
    breaks.extend(line_ends);
}

/// Reorder one line visually and lay it out from pen 0.
///
/// The visible glyphs occupy `0..width`. Trailing whitespace hangs past the
/// end of the line: to the right in left-to-right paragraphs, to the left in
/// right-to-left ones.
fn layout_line(glyphs: &[&UnwrappedGlyph], rtl: bool, spacing: f32, resolver: &dyn BidiResolver) -> LineLayout {
    let visible_len = glyphs.len() - glyphs.iter().rev().take_while(|g| g.whitespace).count();
    let (visible, hanging) = glyphs.split_at(visible_len);

    let mut laid = Vec::with_capacity(glyphs.len());
    let mut pen = 0.0;
    for index in visual_order(visible, resolver) {
        let glyph = visible[index];
        laid.push(LaidGlyph::new(glyph, pen, false));
        pen += glyph.advance + spacing;
    }
    let width = if visible.is_empty() { 0.0 } else { pen - spacing };

    if rtl {
        let mut hanging_pen = 0.0;
        let mut left: Vec<LaidGlyph> = hanging
            .iter()
            .map(|glyph| {
                hanging_pen -= glyph.advance + spacing;
                LaidGlyph::new(glyph, hanging_pen, true)
            })
            .collect();
        left.reverse();
        left.append(&mut laid);
        laid = left;
    } else {
        for glyph in hanging {
            laid.push(LaidGlyph::new(glyph, pen, true));
            pen += glyph.advance + spacing;
        }
    }

    LineLayout {
        glyphs: laid,
        width,
        ends_paragraph: glyphs
            .last()
            .is_some_and(|g| g.break_after == BreakOpportunity::Mandatory),
    }
}

/// Visual order of `glyphs` (indices into the slice). Paragraph separators
/// inside an unwrapped line close a reordering segment.
fn visual_order(glyphs: &[&UnwrappedGlyph], resolver: &dyn BidiResolver) -> Vec<usize> {
    let mut order = Vec::with_capacity(glyphs.len());
    let mut start = 0;
    while start < glyphs.len() {
        let end = glyphs[start..]
            .iter()
            .position(|g| g.break_after == BreakOpportunity::Mandatory)
            .map_or(glyphs.len(), |i| start + i + 1);
        let levels: Vec<u8> = glyphs[start..end].iter().map(|g| g.level).collect();
        let map = resolver.reorder_visual(&levels);
        if is_permutation(&map, levels.len()) {
            order.extend(map.into_iter().map(|i| start + i));
        } else {
            log::warn!(
                target: "labelshape::wrap",
                "resolver {} returned an invalid visual order, keeping logical order",
                resolver.name()
            );
            order.extend(start..end);
        }
        start = end;
    }
    order
}

fn is_permutation(map: &[usize], len: usize) -> bool {
    if map.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    map.iter()
        .all(|&i| i < len && !std::mem::replace(&mut seen[i], true))
}
