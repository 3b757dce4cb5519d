//! Whole-string character class predicates
//!
//! Checks commonly run on form input next to the field rules: printable
//! ASCII, full-width only, full-width kana names, and characters that are
//! unsafe in passwords or markup.

use std::ops::RangeInclusive;

const ASCII_VISIBLE: RangeInclusive<char> = '\u{21}'..='\u{7E}';
const HALF_WIDTH_KATAKANA: RangeInclusive<char> = '\u{FF61}'..='\u{FF9F}';

/// Ranges accepted by [`is_full_width_kana_text`]
const KANA_TEXT_RANGES: [RangeInclusive<char>; 8] = [
    '\u{30A1}'..='\u{30F4}', // katakana ァ..ヴ
    '\u{FF41}'..='\u{FF5A}', // ａ..ｚ
    '\u{FF21}'..='\u{FF3A}', // Ａ..Ｚ
    '\u{FF10}'..='\u{FF19}', // ０..９
    '\u{0391}'..='\u{03A9}', // Greek capitals
    '\u{03B1}'..='\u{03C9}', // Greek small letters
    '\u{0410}'..='\u{042F}', // Cyrillic capitals
    '\u{0430}'..='\u{044F}', // Cyrillic small letters
];

/// Full-width signs accepted by [`is_full_width_kana_text`]
pub const FULL_WIDTH_SIGNS: &str = concat!(
    "\u{3000}、。，．・：；？！゛゜´｀¨＾￣＿ヽヾゝゞ〃仝々〆〇ー―‐／＼～∥｜…‥",
    "‘’“”（）〔〕［］｛｝〈〉《》「」『』【】＋－±×÷＝≠＜＞≦≧∞∴♂♀°′″℃￥＄￠￡％＃＆＊＠§",
    "☆★○●◎◇◆□■△▲▽▼※〒→←↑↓〓∈∋⊆⊇⊂⊃∪∩∧∨￢⇒⇔∀∃∠⊥⌒∂∇≡≒≪≫√∽∝∵∫∬Å‰♯♭♪†‡¶◯",
);

const DISABLED_CHARS: [char; 7] = ['"', '\'', ',', '.', '\\', '`', '~'];
const PASSWORD_FORBIDDEN_CHARS: [char; 9] = [' ', '"', '\'', ',', '.', '\\', '`', '|', '~'];
const MARKUP_SPECIAL_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Whether every character is visible ASCII, optionally allowing spaces
///
/// Empty input is rejected.
pub fn is_ascii_printable(s: &str, allow_space: bool) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|ch| ASCII_VISIBLE.contains(&ch) || (allow_space && ch == ' '))
}

/// Whether no character is half-width ASCII or half-width katakana
///
/// Empty input is rejected.
pub fn is_all_full_width(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|ch| {
            !(ASCII_VISIBLE.contains(&ch) || HALF_WIDTH_KATAKANA.contains(&ch) || ch == ' ')
        })
}

/// Whether the text is a full-width reading: katakana, full-width
/// alphanumerics, Greek, Cyrillic and [`FULL_WIDTH_SIGNS`]
pub fn is_full_width_kana_text(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|ch| {
            KANA_TEXT_RANGES.iter().any(|range| range.contains(&ch))
                || FULL_WIDTH_SIGNS.contains(ch)
        })
}

/// Whether the text contains one of `" ' , . \ ` ~`
pub fn has_disabled_char(s: &str) -> bool {
    s.contains(DISABLED_CHARS)
}

/// Whether the text contains a space or one of `" ' , . \ ` | ~`
pub fn has_password_forbidden_char(s: &str) -> bool {
    s.contains(PASSWORD_FORBIDDEN_CHARS)
}

/// Whether the text contains a character with special meaning in HTML
pub fn has_markup_special_char(s: &str) -> bool {
    s.contains(MARKUP_SPECIAL_CHARS)
}

/// Whether the text is non-empty and only ASCII digits
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
