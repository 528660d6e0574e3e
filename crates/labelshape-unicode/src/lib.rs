// this_file: crates/labelshape-unicode/src/lib.rs

//! Unicode support for labelshape: character classes used by line breaking
//! and vertical layout, script detection, and a UAX #9 bidi resolver.

pub mod bidi;
pub mod i18n;
pub mod script;

pub use bidi::UnicodeBidiResolver;
pub use i18n::{
    allows_ideographic_breaking, allows_word_breaking,
    has_upright_vertical_orientation, is_mandatory_break, is_whitespace, vertical_orientation,
    vertical_punctuation, verticalize_punctuation,
};
pub use script::{is_predominantly_ideographic, ScriptClassifier};
