//! Byte-level classification over Shift_JIS
//!
//! The functions here encode a string with [`encoding_rs::SHIFT_JIS`] and walk
//! the resulting bytes. A two-byte character starts with a lead byte
//! (0x81–0x9F, 0xE0–0xFC) followed by a trail byte (0x40–0xFC except 0x7F).
//!
//! The two byte walkers treat a lead byte without a valid trail byte
//! differently. [`has_vendor_characters`] reports it as a hit, while
//! [`extract_digits`] skips two bytes without looking at the second one.

use crate::error::{EncodingFault, Result};
use encoding_rs::{DecoderResult, EncoderResult, SHIFT_JIS};
use tracing::debug;

/// Vendor-specific two-byte ranges (NEC row 13, NEC-selected IBM, IBM).
pub const VENDOR_RANGES: [(u16, u16); 3] = [(0x8740, 0x879E), (0xED40, 0xEFFC), (0xFA40, 0xFC4B)];

/// Class of a byte in lead position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    /// First byte of a two-byte character
    Lead,
    /// Valid second byte of a two-byte character
    Trail,
    /// Stand-alone single-byte character
    Single,
}

impl ByteClass {
    /// Classify a byte that starts a character
    ///
    /// Lead bytes also fall inside the trail range, so a byte is only
    /// reported as [`ByteClass::Trail`] through [`ByteClass::classify_trail`].
    #[inline]
    pub fn classify(byte: u8) -> Self {
        if is_lead_byte(byte) {
            ByteClass::Lead
        } else {
            ByteClass::Single
        }
    }

    /// Classify a byte that follows a lead byte
    #[inline]
    pub fn classify_trail(byte: u8) -> Option<Self> {
        is_trail_byte(byte).then_some(ByteClass::Trail)
    }
}

/// Whether `byte` starts a two-byte character
#[inline]
pub fn is_lead_byte(byte: u8) -> bool {
    (0x81..=0x9F).contains(&byte) || (0xE0..=0xFC).contains(&byte)
}

/// Whether `byte` can end a two-byte character
#[inline]
pub fn is_trail_byte(byte: u8) -> bool {
    (0x40..=0xFC).contains(&byte) && byte != 0x7F
}

/// Whether a combined two-byte value is a vendor-specific character
#[inline]
pub fn is_vendor_code(code: u16) -> bool {
    VENDOR_RANGES
        .iter()
        .any(|&(start, end)| start <= code && code <= end)
}

/// Whether `ch` encodes to a two-byte Shift_JIS sequence
///
/// Single-byte characters and characters Shift_JIS cannot represent both
/// return `false`.
pub fn is_double_byte(ch: char) -> bool {
    if ch.is_ascii() {
        return false;
    }

    let mut src = [0u8; 4];
    let mut dst = [0u8; 4];
    let (result, _, written) = SHIFT_JIS.new_encoder().encode_from_utf8_without_replacement(
        ch.encode_utf8(&mut src),
        &mut dst,
        true,
    );
    matches!(result, EncoderResult::InputEmpty) && written == 2
}

/// One unit of a Shift_JIS byte sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SjisUnit {
    /// Single-byte character
    Single(u8),
    /// Two-byte character as `(lead << 8) | trail`
    Double(u16),
    /// Lead byte at `offset` without a valid trail byte
    Malformed {
        /// Offset of the lead byte
        offset: usize,
    },
}

/// Iterator over the units of a Shift_JIS byte sequence
///
/// A malformed lead byte consumes only itself; the byte after it is read
/// again as the start of the next unit.
#[derive(Debug, Clone)]
pub struct SjisUnits<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SjisUnits<'a> {
    /// Walk `bytes` from the start
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for SjisUnits<'_> {
    type Item = SjisUnit;

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.bytes.get(self.pos)?;
        let offset = self.pos;

        match ByteClass::classify(first) {
            ByteClass::Lead => match self.bytes.get(offset + 1).copied() {
                Some(second) if is_trail_byte(second) => {
                    self.pos += 2;
                    Some(SjisUnit::Double(u16::from_be_bytes([first, second])))
                }
                _ => {
                    self.pos += 1;
                    Some(SjisUnit::Malformed { offset })
                }
            },
            _ => {
                self.pos += 1;
                Some(SjisUnit::Single(first))
            }
        }
    }
}

/// Split a Shift_JIS byte sequence into units
pub fn scan_units(bytes: &[u8]) -> SjisUnits<'_> {
    SjisUnits::new(bytes)
}

/// Encode to Shift_JIS, failing on the first unmappable character
pub fn encode_strict(input: &str) -> Result<Vec<u8>> {
    let mut encoder = SHIFT_JIS.new_encoder();
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut consumed = 0;

    loop {
        let rest = &input[consumed..];
        if let Some(needed) = encoder.max_buffer_length_from_utf8_without_replacement(rest.len())
        {
            out.reserve(needed);
        }
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut out, true);
        consumed += read;
        match result {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::Unmappable(ch) => {
                return Err(EncodingFault::Unmappable {
                    ch,
                    position: consumed - ch.len_utf8(),
                })
            }
            EncoderResult::OutputFull => {}
        }
    }
}

/// Encode to Shift_JIS, writing `?` for each unmappable character
///
/// `?` is a single byte, so the lead/trail alignment of the surrounding
/// characters is unaffected.
pub fn encode_lossy(input: &str) -> Vec<u8> {
    let mut encoder = SHIFT_JIS.new_encoder();
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut rest = input;

    loop {
        if let Some(needed) = encoder.max_buffer_length_from_utf8_without_replacement(rest.len())
        {
            out.reserve(needed);
        }
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut out, true);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => return out,
            EncoderResult::Unmappable(_) => out.push(b'?'),
            EncoderResult::OutputFull => {}
        }
    }
}

/// Decode Shift_JIS bytes, failing on malformed input
pub fn decode_strict(bytes: &[u8]) -> Result<String> {
    let mut decoder = SHIFT_JIS.new_decoder_without_bom_handling();
    let mut out = String::with_capacity(bytes.len() * 3);
    let mut consumed = 0;

    loop {
        let rest = &bytes[consumed..];
        if let Some(needed) = decoder.max_utf8_buffer_length_without_replacement(rest.len()) {
            out.reserve(needed);
        }
        let (result, read) = decoder.decode_to_string_without_replacement(rest, &mut out, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => return Ok(out),
            DecoderResult::Malformed(bad, after) => {
                return Err(EncodingFault::Undecodable {
                    position: consumed.saturating_sub(usize::from(bad) + usize::from(after)),
                })
            }
            DecoderResult::OutputFull => {}
        }
    }
}

/// Whether `input` contains vendor-specific (machine-dependent) characters
///
/// A lead byte without a valid trail byte also counts as a hit. When the
/// input cannot be encoded at all the answer is `false`.
pub fn has_vendor_characters(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let bytes = match encode_strict(input) {
        Ok(bytes) => bytes,
        Err(fault) => {
            debug!(%fault, "vendor character check skipped");
            return false;
        }
    };

    for unit in scan_units(&bytes) {
        match unit {
            SjisUnit::Malformed { offset } => {
                debug!(offset, "lead byte without trail byte");
                return true;
            }
            SjisUnit::Double(code) if is_vendor_code(code) => {
                debug!("vendor character {code:#06X} found");
                return true;
            }
            _ => {}
        }
    }

    false
}

/// Keep only the single-byte ASCII digits of `input`
///
/// Every lead byte is skipped together with the byte after it, whether or
/// not that byte is a valid trail byte.
pub fn extract_digits(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let bytes = encode_lossy(input);
    let mut kept = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if is_lead_byte(byte) {
            i += 2;
            continue;
        }
        if byte.is_ascii_digit() {
            kept.push(byte);
        }
        i += 1;
    }

    match decode_strict(&kept) {
        Ok(digits) => digits,
        Err(fault) => {
            debug!(%fault, "digit extraction fell back to input");
            input.to_string()
        }
    }
}

/// Whether `input` contains C0 control codes other than tab, LF and CR
pub fn has_control_codes(input: &str) -> bool {
    input
        .bytes()
        .any(|b| b <= 0x1F && !matches!(b, 0x09 | 0x0A | 0x0D))
}
