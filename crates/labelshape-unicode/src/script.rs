// this_file: crates/labelshape-unicode/src/script.rs

//! Script detection via the ICU Script property.

use crate::i18n::{allows_ideographic_breaking, is_whitespace};
use icu_properties::{
    maps::{self, CodePointMapDataBorrowed},
    Script,
};

/// Classifies characters and paragraphs by script.
pub struct ScriptClassifier {
    script_map: CodePointMapDataBorrowed<'static, Script>,
}

impl ScriptClassifier {
    pub fn new() -> Self {
        Self {
            script_map: maps::script(),
        }
    }

    pub fn script(&self, c: char) -> Script {
        self.script_map.get(c)
    }

    /// Scripts written without spaces between words.
    pub fn is_ideographic_script(script: Script) -> bool {
        matches!(
            script,
            Script::Han | Script::Hiragana | Script::Katakana | Script::Bopomofo | Script::Yi
        )
    }

    fn is_significant_script(script: Script) -> bool {
        !matches!(script, Script::Common | Script::Inherited | Script::Unknown)
    }

    /// Whether more than half of the strongly scripted characters of `text`
    /// belong to an ideographic script.
    ///
    /// Text made only of script-neutral characters (CJK punctuation, digits)
    /// counts as ideographic when every non-whitespace character allows
    /// ideographic breaking.
    pub fn is_predominantly_ideographic(&self, text: &str) -> bool {
        let mut significant = 0usize;
        let mut ideographic = 0usize;
        for c in text.chars() {
            let script = self.script(c);
            if !Self::is_significant_script(script) {
                continue;
            }
            significant += 1;
            if Self::is_ideographic_script(script) {
                ideographic += 1;
            }
        }

        if significant == 0 {
            let mut visible = text.chars().filter(|&c| !is_whitespace(c)).peekable();
            return visible.peek().is_some() && visible.all(allows_ideographic_breaking);
        }
        ideographic * 2 > significant
    }
}

impl Default for ScriptClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around [`ScriptClassifier::is_predominantly_ideographic`].
pub fn is_predominantly_ideographic(text: &str) -> bool {
    ScriptClassifier::new().is_predominantly_ideographic(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts() {
        let classifier = ScriptClassifier::new();
        assert_eq!(classifier.script('a'), Script::Latin);
        assert_eq!(classifier.script('中'), Script::Han);
        assert_eq!(classifier.script('ש'), Script::Hebrew);
    }

    #[test]
    fn test_predominantly_ideographic() {
        assert!(is_predominantly_ideographic("東京都千代田区"));
        assert!(is_predominantly_ideographic("ひらがなとカタカナ"));
        assert!(is_predominantly_ideographic("東京 Tower"));
        assert!(!is_predominantly_ideographic("Tokyo 東"));
        assert!(!is_predominantly_ideographic("Main Street"));
        assert!(!is_predominantly_ideographic("서울특별시"));
    }

    #[test]
    fn test_neutral_only_text() {
        assert!(is_predominantly_ideographic("。、"));
        assert!(!is_predominantly_ideographic("123"));
        assert!(!is_predominantly_ideographic("   "));
        assert!(!is_predominantly_ideographic(""));
    }
}
