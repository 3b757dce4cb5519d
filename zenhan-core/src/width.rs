//! Character width conversion
//!
//! Converts strings element-wise between full-width (zenkaku) and half-width
//! (hankaku) forms using the tables in [`crate::tables`].
//!
//! Half-width text spells a voiced kana as two characters (`ｶﾞ`) while
//! full-width text uses one precomposed character (`ガ`), so conversion
//! merges or splits those pairs instead of mapping one character to one
//! character.

use crate::tables::{
    full_range_policy, half_range_policy, is_half_width, kana_to_full, kana_to_half,
    symbol_to_full, symbol_to_half, RangePolicy, FULL_WIDTH_SHIFT, SEMI_VOICED_MARK, VOICED_MARK,
};
use crate::sjis::is_double_byte;

/// Conversion target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Width {
    /// Half-width (hankaku)
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "hankaku"))]
    Half,
    /// Full-width (zenkaku)
    #[cfg_attr(feature = "serde", serde(alias = "zenkaku"))]
    Full,
}

impl Width {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Width::Half => "half",
            Width::Full => "full",
        }
    }
}

impl std::str::FromStr for Width {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "half" | "hankaku" => Ok(Width::Half),
            "full" | "zenkaku" => Ok(Width::Full),
            other => Err(format!("unknown width '{other}', expected 'half' or 'full'")),
        }
    }
}

/// Convert `input` towards `width`
pub fn convert(input: &str, width: Width) -> String {
    match width {
        Width::Half => to_half_width(input),
        Width::Full => to_full_width(input),
    }
}

/// Convert full-width characters to half width
///
/// Half-width characters are copied unchanged. Full-width kana, digits,
/// letters and the enumerated symbols are converted. Any other wide
/// character (kanji, hiragana, ...) is dropped.
///
/// ```
/// use zenhan_core::to_half_width;
///
/// assert_eq!(to_half_width("ガ"), "ｶﾞ");
/// assert_eq!(to_half_width("ＡＢＣ１２３"), "ABC123");
/// ```
pub fn to_half_width(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for ch in input.chars() {
        if is_half_width(ch) {
            out.push(ch);
            continue;
        }

        match full_range_policy(ch) {
            Some(RangePolicy::TableLookup) => {
                if let Some(half) = kana_to_half(ch) {
                    out.push_str(half);
                }
            }
            Some(RangePolicy::Shift) => {
                if let Some(shifted) = char::from_u32(ch as u32 - FULL_WIDTH_SHIFT) {
                    out.push(shifted);
                }
            }
            None => {
                if let Some(half) = symbol_to_half(ch) {
                    out.push(half);
                }
            }
        }
    }

    out
}

/// Convert half-width characters to full width
///
/// Characters stored in two Shift_JIS bytes are copied unchanged. A
/// half-width kana followed by `ﾞ` or `ﾟ` is first looked up as a pair; when
/// the pair has no precomposed form the base kana is converted alone and the
/// mark is handled on its own. Everything else with no full-width
/// counterpart is dropped, including characters Shift_JIS cannot encode.
///
/// ```
/// use zenhan_core::to_full_width;
///
/// assert_eq!(to_full_width("ｶﾞ"), "ガ");
/// assert_eq!(to_full_width("abc"), "ａｂｃ");
/// ```
pub fn to_full_width(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if is_double_byte(ch) {
            out.push(ch);
            continue;
        }

        match half_range_policy(ch) {
            Some(RangePolicy::TableLookup) => {
                if let Some(&mark) = chars.peek() {
                    if is_voicing_mark(mark) {
                        let mut pair = String::with_capacity(6);
                        pair.push(ch);
                        pair.push(mark);
                        if let Some(full) = kana_to_full(&pair) {
                            out.push_str(full);
                            chars.next();
                            continue;
                        }
                    }
                }

                let mut buf = [0u8; 4];
                if let Some(full) = kana_to_full(ch.encode_utf8(&mut buf)) {
                    out.push_str(full);
                }
            }
            Some(RangePolicy::Shift) => {
                if let Some(shifted) = char::from_u32(ch as u32 + FULL_WIDTH_SHIFT) {
                    out.push(shifted);
                }
            }
            None => {
                if let Some(full) = symbol_to_full(ch) {
                    out.push(full);
                }
            }
        }
    }

    out
}

/// [`to_half_width`] over an optional value; `None` stays `None`
pub fn to_half_width_opt(input: Option<&str>) -> Option<String> {
    input.map(to_half_width)
}

/// [`to_full_width`] over an optional value; `None` stays `None`
pub fn to_full_width_opt(input: Option<&str>) -> Option<String> {
    input.map(to_full_width)
}

#[inline]
fn is_voicing_mark(ch: char) -> bool {
    ch == VOICED_MARK || ch == SEMI_VOICED_MARK
}
