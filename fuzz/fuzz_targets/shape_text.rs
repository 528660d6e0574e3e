// this_file: fuzz/fuzz_targets/shape_text.rs

#![no_main]

use labelshape::{
    shape, GlyphMetrics, GlyphSet, Point, ShapingOptions, WritingMode,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (header, body) = data.split_at(4);
    let Ok(text) = std::str::from_utf8(body) else {
        return;
    };
    // Bound the quadratic balanced breaker.
    if text.chars().count() > 512 {
        return;
    }

    let glyphs: GlyphSet = text
        .chars()
        .step_by(2)
        .map(|c| (c as u32, GlyphMetrics::with_advance((c as u32 % 29) + 1)))
        .collect();

    let writing_mode = match header[0] % 3 {
        0 => WritingMode::Horizontal,
        1 => WritingMode::Vertical,
        _ => WritingMode::VerticalUpright,
    };
    let options = ShapingOptions {
        max_width: f32::from(header[1]) - 16.0,
        spacing: f32::from(header[2] % 8),
        full_justify: header[3] & 1 == 1,
        balanced_breaking: match header[3] >> 1 & 3 {
            0 => None,
            1 => Some(true),
            _ => Some(false),
        },
        translate: Point::new(f32::from(header[0]), -f32::from(header[1])),
        writing_mode,
        ..Default::default()
    };

    let shaping = shape(&glyphs, text, &options);
    assert_eq!(shaping.is_valid(), !text.is_empty());
    assert_eq!(shaping.glyphs.len(), text.chars().count());
    for line in &shaping.lines {
        assert!(line.start <= line.end && line.end <= shaping.glyphs.len());
    }
    assert!(shaping.left <= shaping.right && shaping.top <= shaping.bottom);
});
