// Rust guideline compliant 2026-10-19

//! CSV codec for entry import and export.
//!
//! Exported files are UTF-8 with a byte-order mark, CRLF line endings and
//! RFC-4180 quoting. Imports accept the same grammar, skip the header row and
//! return validated drafts.

use crate::{Entry, EntryDraft, Error, Result, Subject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// UTF-8 byte-order mark written before the header row.
pub const BOM: char = '\u{feff}';

/// Column set written on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvColumns {
    /// `word,meaning,subject,checked`
    #[default]
    Full,
    /// `word,meaning`
    Basic,
}

impl CsvColumns {
    /// Returns the header row for this column set.
    #[must_use]
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            CsvColumns::Full => &["word", "meaning", "subject", "checked"],
            CsvColumns::Basic => &["word", "meaning"],
        }
    }
}

/// Result of parsing a CSV document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvImport {
    /// Valid drafts, in file order.
    pub drafts: Vec<EntryDraft>,
    /// Rows that were missing a word or meaning or could not be read.
    pub skipped: usize,
}

impl CsvImport {
    /// Returns the number of rows that produced a draft.
    #[must_use]
    pub fn imported(&self) -> usize {
        self.drafts.len()
    }
}

/// Serializes entries to CSV text.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn export_csv(entries: &[Entry], columns: CsvColumns) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(columns.header())?;

    for entry in entries {
        match columns {
            CsvColumns::Full => writer.write_record([
                entry.text.as_str(),
                entry.meaning.as_str(),
                entry.subject.as_str(),
                if entry.checked { "true" } else { "false" },
            ])?,
            CsvColumns::Basic => {
                writer.write_record([entry.text.as_str(), entry.meaning.as_str()])?
            }
        }
    }

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    let body = String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    let mut output = String::with_capacity(body.len() + BOM.len_utf8());
    output.push(BOM);
    output.push_str(&body);
    Ok(output)
}

/// Parses CSV text into entry drafts.
///
/// The first row is always treated as a header. Unknown subjects become
/// `noun`; `checked` is true only for the literal token `true`.
///
/// # Errors
///
/// Returns an error only if the input cannot be read at all; bad rows are
/// counted in [`CsvImport::skipped`].
pub fn import_csv(text: &str) -> Result<CsvImport> {
    let body = text.strip_prefix(BOM).unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut import = CsvImport::default();

    for (idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                // Row numbers are 1-based and the header is row 1.
                warn!(row = idx + 2, error = %err, "skipping unreadable CSV row");
                import.skipped += 1;
                continue;
            }
        };

        let draft = EntryDraft {
            text: record.get(0).unwrap_or_default().to_string(),
            meaning: record.get(1).unwrap_or_default().to_string(),
            subject: record
                .get(2)
                .map(Subject::parse_lenient)
                .unwrap_or_default(),
            checked: record.get(3).is_some_and(|v| v.trim() == "true"),
        };

        match draft.normalized() {
            Ok(draft) => import.drafts.push(draft),
            Err(_) => {
                warn!(row = idx + 2, "skipping CSV row without word or meaning");
                import.skipped += 1;
            }
        }
    }

    Ok(import)
}

/// Returns the default export file name for a date.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("wordbook-{}.csv", date.format("%Y-%m-%d"))
}
