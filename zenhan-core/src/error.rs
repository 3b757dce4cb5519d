//! Core error types (deterministic only)

use core::fmt;

/// Shift_JIS codec failure
///
/// Never crosses the public classification functions: each of them recovers
/// locally with a conservative default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingFault {
    /// Character has no Shift_JIS representation
    Unmappable {
        /// The character that could not be encoded
        ch: char,
        /// Byte offset of the character in the UTF-8 input
        position: usize,
    },
    /// Byte sequence is not valid Shift_JIS
    Undecodable {
        /// Byte offset where decoding failed
        position: usize,
    },
}

impl fmt::Display for EncodingFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingFault::Unmappable { ch, position } => write!(
                f,
                "character {ch:?} (U+{:04X}) at byte {position} has no Shift_JIS encoding",
                *ch as u32
            ),
            EncodingFault::Undecodable { position } => {
                write!(f, "invalid Shift_JIS sequence at byte {position}")
            }
        }
    }
}

impl std::error::Error for EncodingFault {}

/// Result type for codec operations
pub type Result<T> = core::result::Result<T, EncodingFault>;
