// this_file: crates/labelshape-core/src/types.rs

//! Core types used throughout the labelshape layout engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph identifier. SDF glyph ranges are indexed by code point, so this is
/// the code point value of the character the glyph renders.
pub type GlyphId = u32;

/// Metrics of one SDF glyph, in font design units at the glyph set's size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphMetrics {
    /// Bitmap width
    pub width: u32,
    /// Bitmap height
    pub height: u32,
    /// Left bearing
    pub left: i32,
    /// Top bearing
    pub top: i32,
    /// Horizontal advance
    pub advance: u32,
}

impl GlyphMetrics {
    pub fn new(width: u32, height: u32, left: i32, top: i32, advance: u32) -> Self {
        Self {
            width,
            height,
            left,
            top,
            advance,
        }
    }

    /// Metrics carrying only an advance, as used for whitespace glyphs.
    pub fn with_advance(advance: u32) -> Self {
        Self {
            advance,
            ..Self::default()
        }
    }
}

/// Overall paragraph direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    /// Detect from the first strong character
    #[default]
    Auto,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::LeftToRight => "left-to-right",
            Direction::RightToLeft => "right-to-left",
            Direction::Auto => "auto",
        }
    }
}

/// Writing mode of a label.
///
/// Values that cannot be parsed fall back to [`WritingMode::Horizontal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum WritingMode {
    #[default]
    Horizontal,
    /// Vertical columns; each glyph is upright or rotated according to its
    /// script.
    Vertical,
    /// Vertical columns with every glyph upright.
    VerticalUpright,
}

impl WritingMode {
    /// Parse a writing mode name, falling back to horizontal.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "horizontal-tb" => Self::Horizontal,
            "vertical" | "vertical-rl" => Self::Vertical,
            "vertical-upright" | "upright" => Self::VerticalUpright,
            other => {
                log::debug!(
                    target: "labelshape::shape",
                    "unrecognized writing mode {other:?}, using horizontal"
                );
                Self::Horizontal
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::VerticalUpright => "vertical-upright",
        }
    }

    pub fn is_vertical(&self) -> bool {
        !matches!(self, Self::Horizontal)
    }
}

impl From<String> for WritingMode {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for WritingMode {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for WritingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-glyph orientation.
///
/// In horizontal layouts every glyph is `Horizontal`. In vertical layouts each
/// glyph is classified individually, so a single column can mix upright
/// ideographs with rotated Latin text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlyphOrientation {
    #[default]
    Horizontal,
    /// Drawn upright inside a vertical column
    Upright,
    /// Drawn rotated 90° clockwise inside a vertical column
    Rotated,
}

impl GlyphOrientation {
    /// Whether the glyph sits in a vertical column.
    pub fn is_vertical(&self) -> bool {
        !matches!(self, Self::Horizontal)
    }

    /// Local rotation applied to the glyph quad, in degrees clockwise.
    pub fn rotation_degrees(&self) -> f32 {
        match self {
            Self::Horizontal | Self::Upright => 0.0,
            Self::Rotated => 90.0,
        }
    }
}

/// 2D point in layout units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A glyph placed in the final layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionedGlyph {
    /// Glyph ID in the glyph set
    pub glyph: GlyphId,
    /// X position of the pen
    pub x: f32,
    /// Y position of the pen
    pub y: f32,
    /// Index of the line this glyph was placed on
    pub line: usize,
    /// Writing-mode tag and local rotation
    pub orientation: GlyphOrientation,
}

impl PositionedGlyph {
    pub fn new(glyph: GlyphId, x: f32, y: f32, line: usize, orientation: GlyphOrientation) -> Self {
        Self {
            glyph,
            x,
            y,
            line,
            orientation,
        }
    }

    /// Whether this glyph is laid out in a vertical column.
    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }
}

/// Span and width of one wrapped line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineMetrics {
    /// First glyph index (inclusive) in [`Shaping::glyphs`]
    pub start: usize,
    /// Last glyph index (exclusive) in [`Shaping::glyphs`]
    pub end: usize,
    /// Visible width, trailing whitespace excluded
    pub width: f32,
}

impl LineMetrics {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Result of shaping one label.
///
/// Glyphs are stored line by line, each line in visual (left-to-right screen)
/// order. A shaping built from empty input has no glyphs and reports
/// `is_valid() == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shaping {
    /// Positioned glyphs
    pub glyphs: Vec<PositionedGlyph>,
    /// Line spans into `glyphs`
    pub lines: Vec<LineMetrics>,
    /// Top edge of the block
    pub top: f32,
    /// Bottom edge of the block
    pub bottom: f32,
    /// Left edge of the block
    pub left: f32,
    /// Right edge of the block
    pub right: f32,
    /// Writing mode the label was shaped for
    pub writing_mode: WritingMode,
}

impl Shaping {
    /// An empty, invalid shaping anchored at `translate`.
    pub fn invalid(translate: Point, writing_mode: WritingMode) -> Self {
        Self {
            glyphs: Vec::new(),
            lines: Vec::new(),
            top: translate.y,
            bottom: translate.y,
            left: translate.x,
            right: translate.x,
            writing_mode,
        }
    }

    /// Whether shaping produced a usable layout. Callers must check this
    /// before generating geometry.
    pub fn is_valid(&self) -> bool {
        !self.glyphs.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox {
            x: self.left,
            y: self.top,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Glyphs of one line, in visual order.
    pub fn line_glyphs(&self, line: usize) -> &[PositionedGlyph] {
        self.lines
            .get(line)
            .map(|metrics| &self.glyphs[metrics.start..metrics.end])
            .unwrap_or(&[])
    }
}
