// this_file: crates/labelshape-unicode/src/i18n.rs

//! Character classes used by line breaking and vertical layout.
//!
//! The classes are block based: they answer "may a line break after this
//! character" and "does this character stay upright in a vertical column"
//! without a full UAX #14 / UAX #50 implementation.

use labelshape_core::GlyphOrientation;

const NEWLINE: char = '\n';
const ZERO_WIDTH_SPACE: char = '\u{200B}';

macro_rules! blocks {
    ($($name:ident => $start:literal ..= $end:literal),* $(,)?) => {
        $(
            #[inline]
            fn $name(c: char) -> bool {
                ($start..=$end).contains(&(c as u32))
            }
        )*
    };
}

blocks! {
    in_hangul_jamo => 0x1100..=0x11FF,
    in_canadian_syllabics => 0x1400..=0x167F,
    in_canadian_syllabics_extended => 0x18B0..=0x18FF,
    in_cjk_radicals_supplement => 0x2E80..=0x2EFF,
    in_kangxi_radicals => 0x2F00..=0x2FDF,
    in_ideographic_description => 0x2FF0..=0x2FFF,
    in_cjk_symbols_punctuation => 0x3000..=0x303F,
    in_hiragana => 0x3040..=0x309F,
    in_katakana => 0x30A0..=0x30FF,
    in_bopomofo => 0x3100..=0x312F,
    in_hangul_compatibility_jamo => 0x3130..=0x318F,
    in_kanbun => 0x3190..=0x319F,
    in_bopomofo_extended => 0x31A0..=0x31BF,
    in_cjk_strokes => 0x31C0..=0x31EF,
    in_katakana_phonetic_extensions => 0x31F0..=0x31FF,
    in_enclosed_cjk => 0x3200..=0x32FF,
    in_cjk_compatibility => 0x3300..=0x33FF,
    in_cjk_extension_a => 0x3400..=0x4DBF,
    in_yijing_hexagrams => 0x4DC0..=0x4DFF,
    in_cjk_unified => 0x4E00..=0x9FFF,
    in_yi_syllables => 0xA000..=0xA48F,
    in_yi_radicals => 0xA490..=0xA4CF,
    in_hangul_jamo_extended_a => 0xA960..=0xA97F,
    in_hangul_syllables => 0xAC00..=0xD7AF,
    in_hangul_jamo_extended_b => 0xD7B0..=0xD7FF,
    in_cjk_compatibility_ideographs => 0xF900..=0xFAFF,
    in_vertical_forms => 0xFE10..=0xFE1F,
    in_cjk_compatibility_forms => 0xFE30..=0xFE4F,
    in_small_form_variants => 0xFE50..=0xFE6F,
    in_halfwidth_fullwidth => 0xFF00..=0xFFEF,
    in_cjk_supplementary => 0x20000..=0x3134F,
}

/// Whitespace that never counts towards a line's measured width.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | ZERO_WIDTH_SPACE
    )
}

/// Whether a line may break after `c` in word-delimited text: spaces plus
/// punctuation that often appears without surrounding spaces.
pub fn allows_word_breaking(c: char) -> bool {
    matches!(
        c,
        NEWLINE
            | ' '
            | '&'
            | '('
            | ')'
            | '+'
            | '-'
            | '/'
            | '\u{AD}'   // soft hyphen
            | '\u{B7}'   // middle dot
            | ZERO_WIDTH_SPACE
            | '\u{2010}' // hyphen
            | '\u{2013}' // en dash
    )
}

/// Whether a line must break after `c`.
pub fn is_mandatory_break(c: char) -> bool {
    c == NEWLINE
}

/// Whether a line may break after `c` in text written without word
/// delimiters.
pub fn allows_ideographic_breaking(c: char) -> bool {
    if (c as u32) < 0x2E80 {
        return false;
    }
    in_bopomofo_extended(c)
        || in_bopomofo(c)
        || in_cjk_compatibility_forms(c)
        || in_cjk_compatibility_ideographs(c)
        || in_cjk_compatibility(c)
        || in_cjk_radicals_supplement(c)
        || in_cjk_strokes(c)
        || in_cjk_symbols_punctuation(c)
        || in_cjk_extension_a(c)
        || in_cjk_unified(c)
        || in_cjk_supplementary(c)
        || in_enclosed_cjk(c)
        || in_halfwidth_fullwidth(c)
        || in_hiragana(c)
        || in_ideographic_description(c)
        || in_kangxi_radicals(c)
        || in_katakana_phonetic_extensions(c)
        || in_katakana(c)
        || in_vertical_forms(c)
        || in_yi_radicals(c)
        || in_yi_syllables(c)
}

/// Whether `c` stays upright in a vertical column.
pub fn has_upright_vertical_orientation(c: char) -> bool {
    let code = c as u32;
    // modifier letter yin/yang departing tone marks
    if code == 0x02EA || code == 0x02EB {
        return true;
    }
    if code < 0x1100 {
        return false;
    }

    if in_bopomofo_extended(c) || in_bopomofo(c) {
        return true;
    }
    if in_cjk_compatibility_forms(c) {
        // dashed overline .. wavy low line
        return !(0xFE49..=0xFE4F).contains(&code);
    }
    if in_cjk_compatibility_ideographs(c)
        || in_cjk_compatibility(c)
        || in_cjk_radicals_supplement(c)
        || in_cjk_strokes(c)
    {
        return true;
    }
    if in_cjk_symbols_punctuation(c) {
        // brackets and the wavy dash rotate with the column
        return !(0x3008..=0x3011).contains(&code)
            && !(0x3014..=0x301F).contains(&code)
            && code != 0x3030;
    }
    if in_cjk_extension_a(c)
        || in_cjk_unified(c)
        || in_cjk_supplementary(c)
        || in_enclosed_cjk(c)
        || in_hangul_compatibility_jamo(c)
        || in_hangul_jamo_extended_a(c)
        || in_hangul_jamo_extended_b(c)
        || in_hangul_jamo(c)
        || in_hangul_syllables(c)
        || in_hiragana(c)
        || in_ideographic_description(c)
        || in_kanbun(c)
        || in_kangxi_radicals(c)
        || in_katakana_phonetic_extensions(c)
    {
        return true;
    }
    if in_katakana(c) {
        // prolonged sound mark
        return code != 0x30FC;
    }
    if in_halfwidth_fullwidth(c) {
        return code != 0xFF08
            && !(0xFF09..=0xFF0C).contains(&code)
            && code != 0xFF0D
            && code != 0xFF0E
            && !(0xFF1A..=0xFF1E).contains(&code)
            && code != 0xFF3B
            && code != 0xFF3D
            && code != 0xFF3F
            && !(0xFF5B..=0xFFDF).contains(&code)
            && code != 0xFFE3
            && !(0xFFE8..=0xFFEF).contains(&code);
    }
    if in_small_form_variants(c) {
        return !(0xFE58..=0xFE5E).contains(&code) && !(0xFE63..=0xFE66).contains(&code);
    }
    in_canadian_syllabics(c)
        || in_canadian_syllabics_extended(c)
        || in_vertical_forms(c)
        || in_yijing_hexagrams(c)
        || in_yi_syllables(c)
        || in_yi_radicals(c)
}

/// Orientation class of `c` inside a vertical column.
pub fn vertical_orientation(c: char) -> GlyphOrientation {
    if has_upright_vertical_orientation(c) {
        GlyphOrientation::Upright
    } else {
        GlyphOrientation::Rotated
    }
}

/// Vertical presentation form of a punctuation character.
pub fn vertical_punctuation(c: char) -> Option<char> {
    let vertical = match c {
        '!' | '！' => '︕',
        '#' => '＃',
        '$' => '＄',
        '%' => '％',
        '&' => '＆',
        '(' | '（' | '｟' => '︵',
        ')' | '）' | '｠' => '︶',
        '*' => '＊',
        '+' => '＋',
        ',' | '，' => '︐',
        '-' | '–' | '－' => '︲',
        '.' | '‧' | '．' => '・',
        '/' => '／',
        ':' | '：' => '︓',
        ';' | '；' => '︔',
        '<' | '〈' | '＜' => '︿',
        '=' => '＝',
        '>' | '〉' | '＞' => '﹀',
        '?' | '？' => '︖',
        '@' => '＠',
        '[' | '［' => '﹇',
        '\\' => '＼',
        ']' | '］' => '﹈',
        '^' => '＾',
        '_' | '＿' => '︳',
        '`' => '｀',
        '{' | '｛' => '︷',
        '|' | '｜' => '―',
        '}' | '｝' => '︸',
        '~' => '～',
        '¢' => '￠',
        '£' => '￡',
        '¥' => '￥',
        '¦' => '￤',
        '¬' => '￢',
        '¯' => '￣',
        '—' => '︱',
        '‘' | '『' => '﹃',
        '’' | '』' => '﹄',
        '“' | '「' | '｢' => '﹁',
        '”' | '」' | '｣' => '﹂',
        '…' => '︙',
        '₩' => '￦',
        '、' => '︑',
        '。' | '｡' => '︒',
        '《' => '︽',
        '》' => '︾',
        '【' => '︻',
        '】' => '︼',
        '〔' => '︹',
        '〕' => '︺',
        '〖' => '︗',
        '〗' => '︘',
        _ => return None,
    };
    Some(vertical)
}

/// Replace punctuation with its vertical presentation form where the
/// surrounding characters are laid out upright.
///
/// A character is replaced only when neither neighbour is a rotated
/// character (punctuation neighbours count as replaceable) and `available`
/// accepts the vertical form. The result has the same number of characters
/// as `text`.
pub fn verticalize_punctuation(text: &str, available: impl Fn(char) -> bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    let keeps_upright = |neighbour: Option<&char>| match neighbour {
        None => true,
        Some(&c) => {
            vertical_orientation(c) == GlyphOrientation::Upright || vertical_punctuation(c).is_some()
        }
    };

    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let prev = i.checked_sub(1).and_then(|p| chars.get(p));
            let next = chars.get(i + 1);
            match vertical_punctuation(c) {
                Some(vertical) if keeps_upright(prev) && keeps_upright(next) && available(vertical) => vertical,
                _ => c,
            }
        })
        .collect()
}
