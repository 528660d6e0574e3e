// this_file: crates/labelshape-core/src/diagnostics.rs

//! Shaping diagnostics helpers used for structured debug logging.

use crate::options::ShapingOptions;
use crate::types::Shaping;
use log::{debug, log_enabled, Level};

/// Lightweight snapshot of one shape request and its outcome.
#[derive(Debug)]
pub struct ShapingDiagnostics<'a> {
    resolver: &'a str,
    chars: usize,
    glyphs: usize,
    lines: usize,
    valid: bool,
    direction: &'static str,
    writing_mode: &'static str,
    max_width: f32,
    line_height: f32,
    width: f32,
    height: f32,
}

impl<'a> ShapingDiagnostics<'a> {
    /// Capture the diagnostic snapshot for a finished shape call.
    pub fn new(resolver: &'a str, text: &str, options: &ShapingOptions, shaping: &Shaping) -> Self {
        Self {
            resolver,
            chars: text.chars().count(),
            glyphs: shaping.glyphs.len(),
            lines: shaping.line_count(),
            valid: shaping.is_valid(),
            direction: options.direction.as_str(),
            writing_mode: shaping.writing_mode.as_str(),
            max_width: options.max_width,
            line_height: options.line_height,
            width: shaping.width(),
            height: shaping.height(),
        }
    }

    /// Emit the snapshot at debug level when logging is enabled.
    pub fn log(&self) {
        if log_enabled!(target: "labelshape::shape", Level::Debug) {
            debug!(
                target: "labelshape::shape",
                "resolver={resolver} chars={chars} glyphs={glyphs} lines={lines} valid={valid} direction={direction} mode={mode} max_width={max_width:.1} line_height={line_height:.1} size={width:.1}x{height:.1}",
                resolver = self.resolver,
                chars = self.chars,
                glyphs = self.glyphs,
                lines = self.lines,
                valid = self.valid,
                direction = self.direction,
                mode = self.writing_mode,
                max_width = self.max_width,
                line_height = self.line_height,
                width = self.width,
                height = self.height,
            );
        }
    }
}
