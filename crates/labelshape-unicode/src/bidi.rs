// this_file: crates/labelshape-unicode/src/bidi.rs

//! Unicode Bidirectional Algorithm resolver backed by `unicode-bidi`.

use labelshape_core::{BidiResolver, BidiRun, Direction};
use unicode_bidi::{BidiInfo, Level, LTR_LEVEL};

/// [`BidiResolver`] implementing UAX #9 through the `unicode-bidi` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBidiResolver;

impl UnicodeBidiResolver {
    pub fn new() -> Self {
        Self
    }

    fn base_level(base: Direction) -> Option<Level> {
        match base {
            Direction::LeftToRight => Some(Level::ltr()),
            Direction::RightToLeft => Some(Level::rtl()),
            Direction::Auto => None,
        }
    }
}

impl BidiResolver for UnicodeBidiResolver {
    fn resolve(&self, text: &str, base: Direction) -> Vec<BidiRun> {
        if text.is_empty() {
            return Vec::new();
        }

        let info = BidiInfo::new(text, Self::base_level(base));
        let mut runs = Vec::new();
        for paragraph in &info.paragraphs {
            let (levels, visual) = info.visual_runs(paragraph, paragraph.range.clone());
            for range in visual {
                if range.is_empty() {
                    continue;
                }
                let level = levels[range.start].number();
                runs.push(BidiRun::new(range, level));
            }
        }

        log::trace!(
            target: "labelshape::shape",
            "resolved {} bidi runs over {} paragraphs",
            runs.len(),
            info.paragraphs.len()
        );
        runs
    }

    fn reorder_visual(&self, levels: &[u8]) -> Vec<usize> {
        let levels: Vec<Level> = levels
            .iter()
            .map(|&level| Level::new(level).unwrap_or(LTR_LEVEL))
            .collect();
        BidiInfo::reorder_visual(&levels)
    }

    fn name(&self) -> &str {
        "unicode-bidi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_text<'a>(text: &'a str, run: &BidiRun) -> &'a str {
        &text[run.range.clone()]
    }

    #[test]
    fn test_pure_ltr_is_one_run() {
        let runs = UnicodeBidiResolver.resolve("Main Street", Direction::Auto);
        assert_eq!(runs, vec![BidiRun::new(0..11, 0)]);
    }

    #[test]
    fn test_hebrew_detects_rtl() {
        let text = "שלום";
        let runs = UnicodeBidiResolver.resolve(text, Direction::Auto);
        assert_eq!(runs.len(), 1);
        assert!(runs[0].is_rtl());
        assert_eq!(run_text(text, &runs[0]), text);
    }

    #[test]
    fn test_mixed_runs_in_visual_order() {
        let text = "abc שלום";
        let runs = UnicodeBidiResolver.resolve(text, Direction::LeftToRight);
        assert_eq!(runs.len(), 2);
        assert!(!runs[0].is_rtl());
        assert!(runs[1].is_rtl());
        assert_eq!(run_text(text, &runs[1]), "שלום");
    }

    #[test]
    fn test_reorder_visual_reverses_rtl_span() {
        let order = UnicodeBidiResolver.reorder_visual(&[0, 0, 1, 1, 1, 0]);
        assert_eq!(order, vec![0, 1, 4, 3, 2, 5]);
        assert_eq!(UnicodeBidiResolver.reorder_visual(&[1, 1]), vec![1, 0]);
        assert!(UnicodeBidiResolver.reorder_visual(&[]).is_empty());
    }
}
