//! Standard input reading

use super::{Encoding, FileReader};
use anyhow::{Context, Result};
use std::io::{self, Read};

/// Read all of stdin and decode it
pub fn read_stdin(encoding: Encoding) -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;

    FileReader::decode(bytes, encoding).context("Failed to decode stdin")
}
