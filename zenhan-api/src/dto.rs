//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use zenhan_core::{charset, sjis, Rule};

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// UTF-8 file
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Raw bytes (Shift_JIS)
    ShiftJis(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::ShiftJis(bytes) => f.debug_tuple("ShiftJis").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from Shift_JIS bytes
    pub fn from_shift_jis(bytes: Vec<u8>) -> Self {
        Input::ShiftJis(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::ShiftJis(bytes) => sjis::decode_strict(&bytes).map_err(ApiError::Encoding),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    /// The field as validated
    pub field: String,
    /// Whether every rule passed
    pub pass: bool,
    /// First failing rule
    pub failed_rule: Option<Rule>,
}

impl ValidationReport {
    /// Human-readable reason for the failure, if any
    pub fn reason(&self) -> Option<&'static str> {
        self.failed_rule.map(|rule| rule.description())
    }
}

/// Byte and character checks on one piece of text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckReport {
    /// Contains vendor-specific Shift_JIS characters
    pub vendor_characters: bool,
    /// Contains C0 control codes other than tab, LF and CR
    pub control_codes: bool,
    /// Contains characters with special meaning in HTML
    pub markup_characters: bool,
    /// Single-byte digits of the text
    pub digits: String,
    /// Whole-string character classes
    pub classes: CharacterClasses,
}

impl CheckReport {
    /// Whether none of the checks flagged the text
    pub fn is_clean(&self) -> bool {
        !self.vendor_characters && !self.control_codes && !self.markup_characters
    }
}

/// Character classes that hold for a whole piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterClasses {
    /// Visible ASCII and spaces only
    pub ascii_printable: bool,
    /// No half-width ASCII or katakana
    pub full_width: bool,
    /// A full-width reading: katakana, full-width alphanumerics and signs
    pub kana_text: bool,
    /// ASCII digits only
    pub digits_only: bool,
    /// Contains one of `" ' , . \ ` ~`
    pub disabled_characters: bool,
    /// Contains a character rejected in passwords
    pub password_forbidden: bool,
}

impl CharacterClasses {
    /// Classify `text`
    pub fn of(text: &str) -> Self {
        Self {
            ascii_printable: charset::is_ascii_printable(text, true),
            full_width: charset::is_all_full_width(text),
            kana_text: charset::is_full_width_kana_text(text),
            digits_only: charset::is_digits(text),
            disabled_characters: charset::has_disabled_char(text),
            password_forbidden: charset::has_password_forbidden_char(text),
        }
    }

    /// Short names of the classes that hold, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.ascii_printable, "ascii"),
            (self.full_width, "full-width"),
            (self.kana_text, "kana-text"),
            (self.digits_only, "digits"),
            (self.disabled_characters, "disabled-chars"),
            (self.password_forbidden, "password-forbidden"),
        ]
        .into_iter()
        .filter_map(|(holds, name)| holds.then_some(name))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_jis_input() {
        let input = Input::from_shift_jis(vec![0x83, 0x4A, 0xB6, 0x31]);
        assert_eq!(input.read_text().unwrap(), "カｶ1");
    }

    #[test]
    fn test_malformed_shift_jis_input() {
        let input = Input::from_shift_jis(vec![0x41, 0x81]);
        assert!(matches!(input.read_text(), Err(ApiError::Encoding(_))));
    }

    #[test]
    fn test_input_debug_hides_bytes() {
        let debug = format!("{:?}", Input::from_shift_jis(vec![0x82, 0xA0]));
        assert_eq!(debug, "ShiftJis(2)");
    }

    #[test]
    fn test_report_reason() {
        let report = ValidationReport {
            field: "a@@b.c".to_string(),
            pass: false,
            failed_rule: Some(Rule::SingleAtSign),
        };
        assert_eq!(report.reason(), Some("more than one '@'"));
    }

    #[test]
    fn test_character_classes() {
        let classes = CharacterClasses::of("ヤマダ\u{3000}タロウ");
        assert!(classes.full_width && classes.kana_text);
        assert!(!classes.ascii_printable);
        assert_eq!(classes.names(), vec!["full-width", "kana-text"]);

        let classes = CharacterClasses::of("0312345678");
        assert_eq!(classes.names(), vec!["ascii", "digits"]);

        let classes = CharacterClasses::of("my pass.word");
        assert_eq!(
            classes.names(),
            vec!["ascii", "disabled-chars", "password-forbidden"]
        );

        assert!(CharacterClasses::of("").names().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_json_uses_rule_names() {
        let report = ValidationReport {
            field: "user@localhost".to_string(),
            pass: false,
            failed_rule: Some(Rule::DomainHasDot),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"field":"user@localhost","pass":false,"failed_rule":"domain-has-dot"}"#
        );
    }
}
