// this_file: crates/labelshape-core/src/lib.rs

//! Core traits and types for the labelshape SDF label layout engine.

pub mod bidi;
pub mod cache;
pub mod diagnostics;
pub mod error;
pub mod glyph_set;
pub mod options;
pub mod types;
pub mod utils;

pub use bidi::{BidiResolver, BidiRun, LogicalOrderResolver};
pub use cache::{CacheStats, GlyphSetRegistry, ShapeKey, ShapingCache};
pub use diagnostics::ShapingDiagnostics;
pub use error::LabelShapeError;
pub use glyph_set::{GlyphSet, GlyphSetBuilder};
pub use options::{ShapingOptions, ONE_EM};
pub use types::{
    BoundingBox, Direction, GlyphId, GlyphMetrics, GlyphOrientation, LineMetrics, Point,
    PositionedGlyph, Shaping, WritingMode,
};

/// Result type for labelshape operations
pub type Result<T> = std::result::Result<T, LabelShapeError>;
