//! File reading utilities

use super::Encoding;
use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use zenhan_api::Input;

/// File reader with UTF-8 or Shift_JIS decoding
pub struct FileReader;

impl FileReader {
    /// Read a file and decode it
    pub fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Self::decode(bytes, encoding)
            .with_context(|| format!("Failed to decode file: {}", path.display()))
    }

    /// Decode raw bytes
    pub fn decode(bytes: Vec<u8>, encoding: Encoding) -> Result<String> {
        let input = match encoding {
            Encoding::Utf8 => Input::Bytes(bytes),
            Encoding::ShiftJis => Input::from_shift_jis(bytes),
        };

        input
            .read_text()
            .map_err(|e| CliError::DecodeError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("fields.txt");

        let content = "ｔａｒｏ＠ｅｘａｍｐｌｅ．ｊｐ\nﾀﾛｳ\n";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path, Encoding::Utf8).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_shift_jis_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sjis.txt");

        // "カ①1" in Shift_JIS
        fs::write(&file_path, [0x83, 0x4A, 0x87, 0x40, 0x31]).unwrap();

        let result = FileReader::read_text(&file_path, Encoding::ShiftJis).unwrap();
        assert_eq!(result, "カ①1");
    }

    #[test]
    fn test_shift_jis_file_read_as_utf8_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sjis.txt");
        fs::write(&file_path, [0x83, 0x4A]).unwrap();

        let err = FileReader::read_text(&file_path, Encoding::Utf8).unwrap_err();
        assert!(err.to_string().contains("Failed to decode file"));
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let err = FileReader::read_text(path, Encoding::Utf8).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        File::create(&file_path).unwrap();

        for encoding in [Encoding::Utf8, Encoding::ShiftJis] {
            assert_eq!(FileReader::read_text(&file_path, encoding).unwrap(), "");
        }
    }
}
