//! Static correspondence tables between half-width and full-width forms
//!
//! Two tables live here:
//!
//! - [`KATAKANA_TABLE`]: positional kana pairs. The half-width side may hold a
//!   base kana followed by a voicing mark (`ｶﾞ`), the full-width side is always
//!   one precomposed character (`ガ`).
//! - [`SYMBOL_TABLE`]: one-to-one punctuation and symbol pairs.
//!
//! Lookups scan in table order and the first match wins. The half-width column
//! of [`KATAKANA_TABLE`] repeats `ｲ ｴ ｶ ｹ ﾜ`; the later rows are never
//! selected when converting towards full width, so `ﾜ` always becomes `ワ`
//! and never `ヮ`.

/// Kana pairs as `(half_width, full_width)`.
pub static KATAKANA_TABLE: [(&str, &str); 87] = [
    ("ｧ", "ァ"),
    ("ｱ", "ア"),
    ("ｨ", "ィ"),
    ("ｲ", "イ"),
    ("ｩ", "ゥ"),
    ("ｳ", "ウ"),
    ("ｪ", "ェ"),
    ("ｴ", "エ"),
    ("ｫ", "ォ"),
    ("ｵ", "オ"),
    ("ｶ", "カ"),
    ("ｶﾞ", "ガ"),
    ("ｷ", "キ"),
    ("ｷﾞ", "ギ"),
    ("ｸ", "ク"),
    ("ｸﾞ", "グ"),
    ("ｹ", "ケ"),
    ("ｹﾞ", "ゲ"),
    ("ｺ", "コ"),
    ("ｺﾞ", "ゴ"),
    ("ｻ", "サ"),
    ("ｻﾞ", "ザ"),
    ("ｼ", "シ"),
    ("ｼﾞ", "ジ"),
    ("ｽ", "ス"),
    ("ｽﾞ", "ズ"),
    ("ｾ", "セ"),
    ("ｾﾞ", "ゼ"),
    ("ｿ", "ソ"),
    ("ｿﾞ", "ゾ"),
    ("ﾀ", "タ"),
    ("ﾀﾞ", "ダ"),
    ("ﾁ", "チ"),
    ("ﾁﾞ", "ヂ"),
    ("ｯ", "ッ"),
    ("ﾂ", "ツ"),
    ("ﾂﾞ", "ヅ"),
    ("ﾃ", "テ"),
    ("ﾃﾞ", "デ"),
    ("ﾄ", "ト"),
    ("ﾄﾞ", "ド"),
    ("ﾅ", "ナ"),
    ("ﾆ", "ニ"),
    ("ﾇ", "ヌ"),
    ("ﾈ", "ネ"),
    ("ﾉ", "ノ"),
    ("ﾊ", "ハ"),
    ("ﾊﾞ", "バ"),
    ("ﾊﾟ", "パ"),
    ("ﾋ", "ヒ"),
    ("ﾋﾞ", "ビ"),
    ("ﾋﾟ", "ピ"),
    ("ﾌ", "フ"),
    ("ﾌﾞ", "ブ"),
    ("ﾌﾟ", "プ"),
    ("ﾍ", "ヘ"),
    ("ﾍﾞ", "ベ"),
    ("ﾍﾟ", "ペ"),
    ("ﾎ", "ホ"),
    ("ﾎﾞ", "ボ"),
    ("ﾎﾟ", "ポ"),
    ("ﾏ", "マ"),
    ("ﾐ", "ミ"),
    // Never reached: both directions hit the symbol table first.
    (".", "．"),
    ("ﾑ", "ム"),
    ("ﾒ", "メ"),
    ("ﾓ", "モ"),
    ("ｬ", "ャ"),
    ("ﾔ", "ヤ"),
    ("ｭ", "ュ"),
    ("ﾕ", "ユ"),
    ("ｮ", "ョ"),
    ("ﾖ", "ヨ"),
    ("ﾗ", "ラ"),
    ("ﾘ", "リ"),
    ("ﾙ", "ル"),
    ("ﾚ", "レ"),
    ("ﾛ", "ロ"),
    ("ﾜ", "ワ"),
    ("ﾜ", "ヮ"),
    ("ｲ", "ヰ"),
    ("ｴ", "ヱ"),
    ("ｦ", "ヲ"),
    ("ﾝ", "ン"),
    ("ｳﾞ", "ヴ"),
    ("ｶ", "ヵ"),
    ("ｹ", "ヶ"),
];

/// Symbol pairs as `(half_width, full_width)`.
///
/// Kana punctuation first, then the printable ASCII symbols in code point
/// order. Both columns are free of duplicates.
pub static SYMBOL_TABLE: [(char, char); 41] = [
    ('｡', '。'),
    ('｢', '「'),
    ('｣', '」'),
    ('､', '、'),
    ('･', '・'),
    ('ｰ', 'ー'),
    ('ﾞ', '゛'),
    ('ﾟ', '゜'),
    (' ', '\u{3000}'),
    ('!', '！'),
    ('"', '\u{201D}'),
    ('#', '＃'),
    ('$', '＄'),
    ('%', '％'),
    ('&', '＆'),
    ('\'', '\u{2019}'),
    ('(', '（'),
    (')', '）'),
    ('*', '＊'),
    ('+', '＋'),
    (',', '，'),
    ('-', '－'),
    ('.', '．'),
    ('/', '／'),
    (':', '：'),
    (';', '；'),
    ('<', '＜'),
    ('=', '＝'),
    ('>', '＞'),
    ('?', '？'),
    ('@', '＠'),
    ('[', '［'),
    ('\\', '￥'),
    (']', '］'),
    ('^', '＾'),
    ('_', '＿'),
    ('`', '\u{2018}'),
    ('{', '｛'),
    ('|', '｜'),
    ('}', '｝'),
    ('~', '～'),
];

/// Offset between ASCII alphanumerics and their full-width forms.
pub const FULL_WIDTH_SHIFT: u32 = 0xFEE0;

/// Half-width voicing mark (dakuten).
pub const VOICED_MARK: char = 'ﾞ';

/// Half-width semi-voicing mark (handakuten).
pub const SEMI_VOICED_MARK: char = 'ﾟ';

/// Conversion policy attached to a code point range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
    /// Scan [`KATAKANA_TABLE`]
    TableLookup,
    /// Add or subtract [`FULL_WIDTH_SHIFT`]
    Shift,
}

/// Inclusive code point range with its conversion policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRange {
    /// First code point of the range
    pub start: char,
    /// Last code point of the range
    pub end: char,
    /// How characters inside the range are converted
    pub policy: RangePolicy,
}

impl CodepointRange {
    const fn new(start: char, end: char, policy: RangePolicy) -> Self {
        Self { start, end, policy }
    }

    /// Whether `ch` falls inside the range
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.start <= ch && ch <= self.end
    }
}

/// Ranges consulted when converting full width to half width, in order.
pub static FULL_WIDTH_RANGES: [CodepointRange; 4] = [
    CodepointRange::new('\u{30A1}', '\u{30F6}', RangePolicy::TableLookup),
    CodepointRange::new('\u{FF10}', '\u{FF19}', RangePolicy::Shift),
    CodepointRange::new('\u{FF21}', '\u{FF3A}', RangePolicy::Shift),
    CodepointRange::new('\u{FF41}', '\u{FF5A}', RangePolicy::Shift),
];

/// Ranges consulted when converting half width to full width, in order.
///
/// The half-width kana range skips the prolonged sound mark `ｰ` (U+FF70),
/// which is handled by [`SYMBOL_TABLE`]. See [`half_range_policy`].
pub static HALF_WIDTH_RANGES: [CodepointRange; 4] = [
    CodepointRange::new('\u{FF66}', '\u{FF9D}', RangePolicy::TableLookup),
    CodepointRange::new('0', '9', RangePolicy::Shift),
    CodepointRange::new('A', 'Z', RangePolicy::Shift),
    CodepointRange::new('a', 'z', RangePolicy::Shift),
];

/// Policy for a wide character, or `None` when only the symbol table applies
pub fn full_range_policy(ch: char) -> Option<RangePolicy> {
    FULL_WIDTH_RANGES
        .iter()
        .find(|range| range.contains(ch))
        .map(|range| range.policy)
}

/// Policy for a half-width character, or `None` when only the symbol table applies
pub fn half_range_policy(ch: char) -> Option<RangePolicy> {
    if ch == 'ｰ' {
        return None;
    }
    HALF_WIDTH_RANGES
        .iter()
        .find(|range| range.contains(ch))
        .map(|range| range.policy)
}

/// Index of the first kana row whose half-width side equals `half`
pub fn half_index(half: &str) -> Option<usize> {
    KATAKANA_TABLE.iter().position(|(h, _)| *h == half)
}

/// Index of the kana row whose full-width side equals `full`
pub fn full_index(full: &str) -> Option<usize> {
    KATAKANA_TABLE.iter().position(|(_, f)| *f == full)
}

/// Half-width form for a full-width kana
pub fn kana_to_half(full: char) -> Option<&'static str> {
    let mut buf = [0u8; 4];
    full_index(full.encode_utf8(&mut buf)).map(|idx| KATAKANA_TABLE[idx].0)
}

/// Full-width form for a half-width kana sequence (one or two characters)
pub fn kana_to_full(half: &str) -> Option<&'static str> {
    half_index(half).map(|idx| KATAKANA_TABLE[idx].1)
}

/// Half-width symbol for a full-width symbol
pub fn symbol_to_half(full: char) -> Option<char> {
    SYMBOL_TABLE
        .iter()
        .find(|(_, f)| *f == full)
        .map(|(h, _)| *h)
}

/// Full-width symbol for a half-width symbol
pub fn symbol_to_full(half: char) -> Option<char> {
    SYMBOL_TABLE
        .iter()
        .find(|(h, _)| *h == half)
        .map(|(_, f)| *f)
}

/// Whether Shift_JIS stores `ch` in a single byte
///
/// That is ASCII plus the half-width katakana block U+FF61–U+FF9F.
#[inline]
pub fn is_half_width(ch: char) -> bool {
    ch.is_ascii() || ('\u{FF61}'..='\u{FF9F}').contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_width_column_is_unique() {
        let unique: HashSet<_> = KATAKANA_TABLE.iter().map(|(_, f)| *f).collect();
        assert_eq!(unique.len(), KATAKANA_TABLE.len());
    }

    #[test]
    fn test_duplicate_half_forms_resolve_to_first_row() {
        assert_eq!(kana_to_full("ﾜ"), Some("ワ"));
        assert_eq!(kana_to_full("ｲ"), Some("イ"));
        assert_eq!(kana_to_full("ｴ"), Some("エ"));
        assert_eq!(kana_to_full("ｶ"), Some("カ"));
        assert_eq!(kana_to_full("ｹ"), Some("ケ"));
    }

    #[test]
    fn test_small_forms_map_back_to_shared_half_form() {
        assert_eq!(kana_to_half('ヮ'), Some("ﾜ"));
        assert_eq!(kana_to_half('ヰ'), Some("ｲ"));
        assert_eq!(kana_to_half('ヱ'), Some("ｴ"));
        assert_eq!(kana_to_half('ヵ'), Some("ｶ"));
        assert_eq!(kana_to_half('ヶ'), Some("ｹ"));
    }

    #[test]
    fn test_voiced_rows() {
        assert_eq!(kana_to_full("ｶﾞ"), Some("ガ"));
        assert_eq!(kana_to_full("ﾊﾟ"), Some("パ"));
        assert_eq!(kana_to_full("ｳﾞ"), Some("ヴ"));
        assert_eq!(kana_to_full("ｱﾞ"), None);
        assert_eq!(kana_to_half('ポ'), Some("ﾎﾟ"));
    }

    #[test]
    fn test_table_covers_full_kana_range() {
        for cp in 0x30A1u32..=0x30F6 {
            let ch = char::from_u32(cp).unwrap();
            assert!(kana_to_half(ch).is_some(), "missing row for {ch}");
        }
    }

    #[test]
    fn test_symbol_table_is_bijective() {
        let halves: HashSet<_> = SYMBOL_TABLE.iter().map(|(h, _)| *h).collect();
        let fulls: HashSet<_> = SYMBOL_TABLE.iter().map(|(_, f)| *f).collect();
        assert_eq!(halves.len(), SYMBOL_TABLE.len());
        assert_eq!(fulls.len(), SYMBOL_TABLE.len());

        for (half, full) in SYMBOL_TABLE.iter() {
            assert_eq!(symbol_to_full(*half), Some(*full));
            assert_eq!(symbol_to_half(*full), Some(*half));
        }
    }

    #[test]
    fn test_symbol_table_covers_printable_ascii_symbols() {
        for ch in (' '..='~').filter(|c| !c.is_ascii_alphanumeric()) {
            assert!(symbol_to_full(ch).is_some(), "missing symbol {ch:?}");
        }
    }

    #[test]
    fn test_range_policies() {
        assert_eq!(full_range_policy('ア'), Some(RangePolicy::TableLookup));
        assert_eq!(full_range_policy('５'), Some(RangePolicy::Shift));
        assert_eq!(full_range_policy('＠'), None);
        assert_eq!(full_range_policy('ー'), None);
        assert_eq!(half_range_policy('ｱ'), Some(RangePolicy::TableLookup));
        assert_eq!(half_range_policy('ｰ'), None);
        assert_eq!(half_range_policy('ﾞ'), None);
        assert_eq!(half_range_policy('z'), Some(RangePolicy::Shift));
    }

    #[test]
    fn test_is_half_width() {
        assert!(is_half_width('a'));
        assert!(is_half_width('\n'));
        assert!(is_half_width('ｶ'));
        assert!(is_half_width('ﾟ'));
        assert!(!is_half_width('カ'));
        assert!(!is_half_width('漢'));
        assert!(!is_half_width('Ａ'));
    }
}
