//! Plain text output formatter

use super::{OutputFormatter, Record, RecordBody};
use anyhow::Result;
use std::io::Write;
use zenhan_api::CharacterClasses;

/// Plain text formatter - outputs one result per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn class_list(classes: &CharacterClasses) -> String {
    let names = classes.names();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(",")
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        match &record.body {
            RecordBody::Converted { output, .. } => writeln!(self.writer, "{output}")?,
            RecordBody::Digits { digits, .. } => writeln!(self.writer, "{digits}")?,
            RecordBody::Checked(checked) => writeln!(
                self.writer,
                "{}:{}: vendor={} control={} markup={} digits={} classes={}",
                record.source,
                record.line,
                flag(checked.report.vendor_characters),
                flag(checked.report.control_codes),
                flag(checked.report.markup_characters),
                checked.report.digits,
                class_list(&checked.report.classes)
            )?,
            RecordBody::Validated(report) => match (report.failed_rule, report.reason()) {
                (Some(rule), Some(reason)) => writeln!(
                    self.writer,
                    "{}:{}: NG {} [{}] {}",
                    record.source, record.line, report.field, rule, reason
                )?,
                _ => writeln!(
                    self.writer,
                    "{}:{}: OK {}",
                    record.source, record.line, report.field
                )?,
            },
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
