// this_file: tests/shaping_properties.rs

//! End-to-end layout properties of the shaping pipeline.

use approx::assert_relative_eq;
use labelshape::{
    shape, utils::ink_bounds, BoundingBox, Direction, GlyphMetrics, GlyphOrientation, GlyphSet,
    GlyphSetBuilder, LogicalOrderResolver, Point, Shaper, Shaping, ShapingOptions,
    UnicodeBidiResolver, WritingMode,
};

const ADVANCE: u32 = 10;

fn glyph_set(chars: &str) -> GlyphSet {
    chars
        .chars()
        .map(|c| (c as u32, GlyphMetrics::new(ADVANCE, 14, 1, 12, ADVANCE)))
        .collect()
}

fn latin() -> GlyphSet {
    glyph_set("ABCDEFGHIJKLMNOPQRSTUVWXYZ abcdefghijklmnopqrstuvwxyz")
}

fn left_top(options: ShapingOptions) -> ShapingOptions {
    ShapingOptions {
        horizontal_align: 0.0,
        vertical_align: 0.0,
        justify: 0.0,
        ..options
    }
}

fn line_text(shaping: &Shaping, line: usize) -> String {
    shaping
        .line_glyphs(line)
        .iter()
        .filter_map(|g| char::from_u32(g.glyph))
        .collect()
}

#[test]
fn determinism() {
    let _ = env_logger::builder().is_test(true).try_init();
    let glyphs = glyph_set("The quick brown fox 中国北京上海אבגד");
    let options = ShapingOptions {
        max_width: 60.0,
        ..Default::default()
    };
    let text = "The quick אבגד brown fox 中国北京上海";
    let first = shape(&glyphs, text, &options);
    for _ in 0..5 {
        assert_eq!(shape(&glyphs, text, &options), first);
    }
}

#[test]
fn width_bound_holds_for_breakable_text() {
    let glyphs = latin();
    let text = "the quick brown fox jumps over the lazy dog";
    for max_width in [50.0, 60.0, 80.0, 120.0, 200.0] {
        let options = ShapingOptions {
            max_width,
            ..Default::default()
        };
        let shaping = shape(&glyphs, text, &options);
        for line in &shaping.lines {
            assert!(line.width <= max_width, "{} > {max_width}", line.width);
        }
    }
}

#[test]
fn width_bound_exempts_unbreakable_word() {
    let glyphs = latin();
    let options = ShapingOptions {
        max_width: 40.0,
        ..Default::default()
    };
    let shaping = shape(&glyphs, "ab incomprehensible cd", &options);
    assert_eq!(shaping.line_count(), 3);
    assert_eq!(line_text(&shaping, 1), "incomprehensible ");
    assert_eq!(shaping.lines[1].width, 160.0);
    assert!(shaping.lines[0].width <= 40.0);
    assert!(shaping.lines[2].width <= 40.0);
}

#[test]
fn order_preservation_for_ltr_text() {
    let glyphs = latin();
    let text = "Main Street";
    let shaping = shape(&glyphs, text, &ShapingOptions::default());
    let emitted: String = shaping.glyphs.iter().filter_map(|g| char::from_u32(g.glyph)).collect();
    assert_eq!(emitted, text);
    assert!(shaping.glyphs.windows(2).all(|pair| pair[0].x < pair[1].x));
}

#[test]
fn bidi_round_trip_for_rtl_text() {
    let text = "שלום עולם";
    let glyphs = glyph_set(text);
    let options = ShapingOptions {
        direction: Direction::RightToLeft,
        ..Default::default()
    };

    for shaping in [
        shape(&glyphs, text, &options),
        Shaper::new(&glyphs, &LogicalOrderResolver).get_shaping(text, &options),
    ] {
        let logical: Vec<u32> = text.chars().map(|c| c as u32).collect();
        let mut visual: Vec<_> = shaping.glyphs.iter().map(|g| (g.x, g.glyph)).collect();
        visual.sort_by(|a, b| a.0.total_cmp(&b.0));
        let visual: Vec<u32> = visual.into_iter().map(|(_, glyph)| glyph).rev().collect();
        assert_eq!(visual, logical);
    }
}

#[test]
fn mixed_direction_keeps_runs_readable() {
    let glyphs = glyph_set("abc אבג");
    let shaping = shape(&glyphs, "abc אבג", &left_top(ShapingOptions::default()));
    assert_eq!(line_text(&shaping, 0), "abc גבא");
}

#[test]
fn translate_is_idempotent() {
    let glyphs = latin();
    let base = ShapingOptions {
        max_width: 70.0,
        ..Default::default()
    };
    let translate = Point::new(13.5, -7.25);
    let moved = shape(&glyphs, "Lorem ipsum dolor sit", &ShapingOptions { translate, ..base.clone() });
    let mut manual = shape(&glyphs, "Lorem ipsum dolor sit", &base);
    for glyph in &mut manual.glyphs {
        glyph.x += translate.x;
        glyph.y += translate.y;
    }

    assert_eq!(manual.glyphs, moved.glyphs);
    assert_relative_eq!(manual.left + translate.x, moved.left);
    assert_relative_eq!(manual.top + translate.y, moved.top);
}

#[test]
fn balanced_breaking_splits_ideographic_text_evenly() {
    let text = "中国北京上海天津广州";
    let glyphs = glyph_set(text);
    let options = ShapingOptions {
        max_width: 60.0,
        balanced_breaking: Some(true),
        ..Default::default()
    };
    let shaping = shape(&glyphs, text, &options);

    assert_eq!(shaping.line_count(), 2);
    let difference = (shaping.lines[0].width - shaping.lines[1].width).abs();
    assert!(difference <= ADVANCE as f32);

    let greedy = shape(&glyphs, text, &ShapingOptions {
        balanced_breaking: Some(false),
        ..options
    });
    assert_eq!(greedy.lines[0].width, 60.0);
    assert_eq!(greedy.lines[1].width, 40.0);
}

#[test]
fn ideographic_text_balances_by_default() {
    let text = "中国北京上海天津广州";
    let glyphs = glyph_set(text);
    let options = ShapingOptions {
        max_width: 60.0,
        ..Default::default()
    };
    let shaping = shape(&glyphs, text, &options);
    assert_eq!(shaping.lines[0].width, 50.0);
}

#[test]
fn scenario_single_line_starts_at_translate() {
    let glyphs = latin();
    let options = ShapingOptions {
        max_width: 500.0,
        horizontal_align: 0.0,
        translate: Point::new(4.0, 2.0),
        ..Default::default()
    };
    let shaping = shape(&glyphs, "AB CD EF", &options);
    assert!(shaping.is_valid());
    assert_eq!(shaping.line_count(), 1);
    assert_eq!(shaping.glyphs[0].x, options.translate.x);
}

#[test]
fn scenario_break_after_cd() {
    let glyphs = latin();
    let options = left_top(ShapingOptions {
        max_width: 5.0 * ADVANCE as f32,
        line_height: 24.0,
        ..Default::default()
    });
    let shaping = shape(&glyphs, "AB CD EF", &options);

    assert_eq!(shaping.line_count(), 2);
    assert_eq!(line_text(&shaping, 0).trim_end(), "AB CD");
    assert_eq!(line_text(&shaping, 1), "EF");
    let first = shaping.line_glyphs(1)[0];
    assert_eq!(first.y, options.line_height);
    assert_eq!(first.x, 0.0);
}

#[test]
fn scenario_missing_glyph_is_placeholder() {
    let mut builder = GlyphSetBuilder::new();
    builder.insert(5, GlyphMetrics::new(8, 8, 0, 8, 17));
    let glyphs = builder.build();

    let text: String = [5u32, 9, 5].iter().filter_map(|&id| char::from_u32(id)).collect();
    let options = left_top(ShapingOptions::default());
    let shaping = Shaper::new(&glyphs, &LogicalOrderResolver).get_shaping(&text, &options);

    assert!(shaping.is_valid());
    let ids: Vec<u32> = shaping.glyphs.iter().map(|g| g.glyph).collect();
    assert_eq!(ids, vec![5, 9, 5]);
    // id 5 advances by 17, the unknown id 9 by nothing
    assert_eq!(shaping.glyphs[1].x - shaping.glyphs[0].x, 17.0);
    assert_eq!(shaping.glyphs[2].x - shaping.glyphs[1].x, 0.0);
}

#[test]
fn empty_text_is_invalid() {
    let shaping = shape(&latin(), "", &ShapingOptions::default());
    assert!(!shaping.is_valid());
    assert!(shaping.glyphs.is_empty());
}

#[test]
fn unwrapped_shaping_is_reusable() {
    let glyphs = latin();
    let shaper = Shaper::new(&glyphs, &UnicodeBidiResolver);
    let unwrapped = shaper.shape_unwrapped("AB CD EF GH", &ShapingOptions::default());
    let snapshot = unwrapped.clone();

    let narrow = shaper.line_wrap(&unwrapped, &ShapingOptions { max_width: 30.0, ..Default::default() });
    let wide = shaper.line_wrap(&unwrapped, &ShapingOptions { max_width: 300.0, ..Default::default() });

    assert_eq!(narrow.line_count(), 4);
    assert_eq!(wide.line_count(), 1);
    assert_eq!(unwrapped, snapshot);
}

#[test]
fn vertical_mode_mixes_orientations() {
    let glyphs = glyph_set("東京AB");
    let options = left_top(ShapingOptions {
        writing_mode: WritingMode::Vertical,
        vertical_height: 24.0,
        ..Default::default()
    });
    let shaping = shape(&glyphs, "東京AB", &options);

    let orientations: Vec<GlyphOrientation> = shaping.glyphs.iter().map(|g| g.orientation).collect();
    assert_eq!(
        orientations,
        vec![
            GlyphOrientation::Upright,
            GlyphOrientation::Upright,
            GlyphOrientation::Rotated,
            GlyphOrientation::Rotated,
        ]
    );
    // one column: constant x, y advancing down
    assert!(shaping.glyphs.iter().all(|g| g.x == shaping.glyphs[0].x));
    let ys: Vec<f32> = shaping.glyphs.iter().map(|g| g.y).collect();
    assert_eq!(ys, vec![0.0, 24.0, 48.0, 58.0]);
    assert_eq!(shaping.height(), 68.0);
    assert_eq!(shaping.writing_mode, WritingMode::Vertical);
}

#[test]
fn vertical_columns_stack_right_to_left() {
    let text = "東京都庁前駅";
    let glyphs = glyph_set(text);
    let options = left_top(ShapingOptions {
        writing_mode: WritingMode::VerticalUpright,
        max_width: 72.0,
        line_height: 30.0,
        vertical_height: 24.0,
        balanced_breaking: Some(false),
        ..Default::default()
    });
    let shaping = shape(&glyphs, text, &options);

    assert_eq!(shaping.line_count(), 2);
    let first_column = shaping.line_glyphs(0)[0].x;
    let second_column = shaping.line_glyphs(1)[0].x;
    assert_eq!(first_column - second_column, options.vertical_height);
    assert_eq!(shaping.width(), 2.0 * options.vertical_height);
}

#[test]
fn unknown_writing_mode_falls_back_to_horizontal() {
    let options = ShapingOptions::from_json(r#"{"writing_mode": "diagonal"}"#).unwrap();
    let shaping = shape(&latin(), "AB", &options);
    assert_eq!(shaping.writing_mode, WritingMode::Horizontal);
    assert!(shaping.glyphs.iter().all(|g| g.orientation == GlyphOrientation::Horizontal));
}

#[test]
fn full_justify_stretches_all_but_last_line() {
    let glyphs = latin();
    let options = ShapingOptions {
        justify: 1.0,
        ..left_top(ShapingOptions {
            max_width: 50.0,
            full_justify: true,
            ..Default::default()
        })
    };
    let shaping = shape(&glyphs, "ABCD EFG HI", &options);

    assert_eq!(shaping.line_count(), 3);
    let block = shaping.width();
    assert_relative_eq!(shaping.lines[0].width, block);
    assert_relative_eq!(shaping.lines[1].width, block);
    assert!(shaping.lines[2].width < block);
}

#[test]
fn full_justify_stretch_follows_justify_weight() {
    let glyphs = latin();
    let second_line = |justify: f32| {
        let options = ShapingOptions {
            justify,
            ..left_top(ShapingOptions {
                max_width: 50.0,
                full_justify: true,
                ..Default::default()
            })
        };
        let shaping = shape(&glyphs, "ABCD EF ABCD", &options);
        let xs: Vec<f32> = shaping.line_glyphs(1).iter().take(2).map(|g| g.x).collect();
        (xs, shaping.lines[1].width)
    };

    assert_eq!(second_line(0.0), (vec![0.0, 10.0], 20.0));
    assert_eq!(second_line(1.0), (vec![0.0, 30.0], 40.0));
}

#[test]
fn newline_forces_break() {
    let glyphs = latin();
    let shaping = shape(&glyphs, "AB\nCD", &ShapingOptions::default());
    assert_eq!(shaping.line_count(), 2);

    let unwrapped = ShapingOptions {
        max_width: 0.0,
        ..Default::default()
    };
    assert_eq!(shape(&glyphs, "AB\nCD", &unwrapped).line_count(), 1);
}

#[test]
fn bounds_follow_anchor() {
    let glyphs = latin();
    let options = ShapingOptions {
        max_width: 0.0,
        line_height: 20.0,
        horizontal_align: 1.0,
        vertical_align: 1.0,
        ..Default::default()
    };
    let shaping = shape(&glyphs, "ABCD", &options);
    assert_eq!(shaping.right, 0.0);
    assert_eq!(shaping.left, -40.0);
    assert_eq!(shaping.bottom, 0.0);
    assert_eq!(shaping.top, -20.0);
}

#[test]
fn ink_bounds_cover_glyph_bitmaps() {
    let glyphs = latin();
    let shaping = shape(&glyphs, "AB", &left_top(ShapingOptions::default()));
    let ink = ink_bounds(&shaping.glyphs, &glyphs);
    assert_eq!(
        ink,
        BoundingBox {
            x: 1.0,
            y: -12.0,
            width: 20.0,
            height: 14.0,
        }
    );
}
