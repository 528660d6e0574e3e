// this_file: crates/labelshape-core/src/options.rs

//! Shaping options.

use crate::error::LabelShapeError;
use crate::types::{Direction, Point, WritingMode};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Size of one em in layout units. SDF glyph sets are generated at 24px.
pub const ONE_EM: f32 = 24.0;

/// Options for shaping one label.
///
/// Every field has a default, so partial JSON documents are accepted:
///
/// ```
/// use labelshape_core::ShapingOptions;
///
/// let options = ShapingOptions::from_json(r#"{"max_width": 120.0, "writing_mode": "vertical"}"#)?;
/// assert_eq!(options.max_width, 120.0);
/// # Ok::<(), labelshape_core::LabelShapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingOptions {
    /// Overall paragraph direction
    pub direction: Direction,
    /// Wrap width; zero or negative disables wrapping
    pub max_width: f32,
    /// Distance between consecutive lines
    pub line_height: f32,
    /// Anchor position across the block: 0 = left, 0.5 = center, 1 = right
    pub horizontal_align: f32,
    /// Anchor position down the block: 0 = top, 0.5 = middle, 1 = bottom
    pub vertical_align: f32,
    /// Line position inside the block: 0 = left, 0.5 = center, 1 = right.
    /// Under `full_justify` it is also the share of slack spread into gaps.
    pub justify: f32,
    /// Stretch every line but the last of each paragraph towards the block width
    pub full_justify: bool,
    /// Extra space between consecutive glyphs
    pub spacing: f32,
    /// Offset applied to every glyph and to the bounds
    pub translate: Point,
    /// Line height in vertical writing modes: the column pitch, and the
    /// advance of upright glyphs down a column
    pub vertical_height: f32,
    /// Writing mode
    pub writing_mode: WritingMode,
    /// Balance line widths of predominantly ideographic text instead of
    /// filling lines greedily. `None` behaves as `Some(true)`; other text is
    /// always broken greedily.
    pub balanced_breaking: Option<bool>,
}

impl Default for ShapingOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Auto,
            max_width: 10.0 * ONE_EM,
            line_height: 1.2 * ONE_EM,
            horizontal_align: 0.5,
            vertical_align: 0.5,
            justify: 0.5,
            full_justify: false,
            spacing: 0.0,
            translate: Point::ORIGIN,
            vertical_height: ONE_EM,
            writing_mode: WritingMode::Horizontal,
            balanced_breaking: None,
        }
    }
}

impl ShapingOptions {
    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether line wrapping is enabled.
    pub fn wraps(&self) -> bool {
        self.max_width > 0.0
    }

    /// Boundary check performed by callers before shaping.
    pub fn validate(&self) -> Result<()> {
        if self.max_width.is_nan() {
            return Err(LabelShapeError::invalid_option("max_width", "must not be NaN"));
        }
        check_non_negative("line_height", self.line_height)?;
        check_non_negative("vertical_height", self.vertical_height)?;
        check_fraction("horizontal_align", self.horizontal_align)?;
        check_fraction("vertical_align", self.vertical_align)?;
        check_fraction("justify", self.justify)?;
        if !self.spacing.is_finite() {
            return Err(LabelShapeError::invalid_option("spacing", "must be finite"));
        }
        if !self.translate.x.is_finite() || !self.translate.y.is_finite() {
            return Err(LabelShapeError::invalid_option("translate", "must be finite"));
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LabelShapeError::invalid_option(
            field,
            format!("must be a finite, non-negative number (got {value})"),
        ));
    }
    Ok(())
}

fn check_fraction(field: &'static str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(LabelShapeError::invalid_option(
            field,
            format!("must lie in [0, 1] (got {value})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = ShapingOptions::default();
        assert!(options.validate().is_ok());
        assert!(options.wraps());
        assert_eq!(options.vertical_height, ONE_EM);
    }

    #[test]
    fn test_negative_line_height_rejected() {
        let options = ShapingOptions {
            line_height: -1.0,
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("line_height"));
    }

    #[test]
    fn test_alignment_out_of_range_rejected() {
        let options = ShapingOptions {
            justify: 1.5,
            ..Default::default()
        };
        assert!(options.validate().is_err());

        let options = ShapingOptions {
            horizontal_align: f32::NAN,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_non_positive_width_disables_wrapping() {
        let options = ShapingOptions {
            max_width: 0.0,
            ..Default::default()
        };
        assert!(!options.wraps());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = ShapingOptions::from_json(
            r#"{"direction": "right-to-left", "translate": {"x": 2.0, "y": -1.0}, "full_justify": true}"#,
        )
        .unwrap();
        assert_eq!(options.direction, Direction::RightToLeft);
        assert_eq!(options.translate, Point::new(2.0, -1.0));
        assert!(options.full_justify);
        assert_eq!(options.line_height, 1.2 * ONE_EM);
    }

    #[test]
    fn test_unknown_writing_mode_in_json_is_horizontal() {
        let options = ShapingOptions::from_json(r#"{"writing_mode": "sideways"}"#).unwrap();
        assert_eq!(options.writing_mode, WritingMode::Horizontal);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = ShapingOptions::from_json("{\"max_width\": }").unwrap_err();
        assert!(matches!(err, LabelShapeError::Config(_)));
    }
}
