// Rust guideline compliant 2026-10-19

//! Output formatting module for the Wordbook CLI.
//!
//! This module renders entries, word lists, quiz results and errors in the
//! supported output formats (JSON, table, plain text).

use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Ansi, Color, ColorSpec, WriteColor};
use wordbook_app::{AppError, DisplayMode, Envelope, QuizSummary};
use wordbook_core::Entry;

/// Output formatter trait.
///
/// Defines the interface for rendering command results in different output
/// formats.
pub trait OutputFormatter {
    /// Formats a single entry, typically the result of a mutation.
    fn format_entry(&self, entry: &Entry) -> String;

    /// Formats a display list, hiding fields according to `mode`.
    fn format_list(&self, entries: &[Entry], mode: DisplayMode) -> String;

    /// Formats a short status message.
    fn format_message(&self, message: &str) -> String;

    /// Formats the result of a finished quiz with its tested history.
    fn format_summary(&self, summary: &QuizSummary, tested: &[Entry]) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;

    /// Returns true when stdout must carry formatted results only, so
    /// interactive text belongs on stderr.
    fn is_structured(&self) -> bool {
        false
    }
}

fn checked_mark(entry: &Entry) -> &'static str {
    if entry.checked {
        "x"
    } else {
        " "
    }
}

/// JSON output formatter.
///
/// Wraps every result in a `{"status": ..., "result": ...}` envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: serde::Serialize>(value: &Envelope<T>) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| {
            json!({ "status": "error", "message": "Failed to serialize output" }).to_string()
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn is_structured(&self) -> bool {
        true
    }

    fn format_entry(&self, entry: &Entry) -> String {
        Self::render(&Envelope::ok(entry))
    }

    fn format_list(&self, entries: &[Entry], mode: DisplayMode) -> String {
        Self::render(&Envelope::ok(json!({
            "entries": entries,
            "total": entries.len(),
            "display_mode": mode,
        })))
    }

    fn format_message(&self, message: &str) -> String {
        Self::render(&Envelope::ok(json!({ "message": message })))
    }

    fn format_summary(&self, summary: &QuizSummary, tested: &[Entry]) -> String {
        Self::render(&Envelope::ok(json!({
            "summary": summary,
            "tested": tested,
        })))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        match error.downcast_ref::<AppError>() {
            Some(app_error) => Self::render(&Envelope::<()>::error(app_error)),
            None => json!({ "status": "error", "message": error.to_string() }).to_string(),
        }
    }
}

/// Table output formatter.
///
/// Renders lists as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_entry(&self, entry: &Entry) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:      {}\n", entry.id));
        output.push_str(&format!("Word:    {}\n", entry.text));
        output.push_str(&format!("Meaning: {}\n", entry.meaning));
        output.push_str(&format!("Subject: {}\n", entry.subject.label()));
        output.push_str(&format!(
            "Checked: {}\n",
            if entry.checked { "yes" } else { "no" }
        ));

        output
    }

    fn format_list(&self, entries: &[Entry], mode: DisplayMode) -> String {
        if entries.is_empty() {
            return "No entries found.".to_string();
        }

        let mut header = vec!["ID", "Done"];
        if mode.shows_text() {
            header.push("Word");
        }
        if mode.shows_meaning() {
            header.push("Meaning");
        }
        header.push("Subject");

        let mut builder = Builder::default();
        builder.push_record(header);

        for entry in entries {
            let mut row = vec![entry.id.to_string(), checked_mark(entry).to_string()];
            if mode.shows_text() {
                row.push(entry.text.clone());
            }
            if mode.shows_meaning() {
                row.push(entry.meaning.clone());
            }
            row.push(entry.subject.label().to_string());
            builder.push_record(row);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_summary(&self, summary: &QuizSummary, tested: &[Entry]) -> String {
        let mut output = format!(
            "Score: {}/{} ({}%)\n",
            summary.score, summary.total_questions, summary.accuracy
        );

        if !tested.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(vec!["Result", "Word", "Meaning"]);
            for entry in tested {
                builder.push_record(vec![
                    if entry.checked { "correct" } else { "wrong" },
                    entry.text.as_str(),
                    entry.meaning.as_str(),
                ]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            output.push_str(&table.to_string());
        }

        output
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        if self.use_color {
            let mut output = Ansi::new(Vec::new());
            let _ = output.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(output, "Error:");
            let _ = output.reset();
            let _ = write!(output, " {}", error);
            String::from_utf8_lossy(&output.into_inner()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// One tab-separated line per entry, without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_entry(&self, entry: &Entry) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            entry.id, entry.text, entry.meaning, entry.subject, entry.checked
        )
    }

    fn format_list(&self, entries: &[Entry], mode: DisplayMode) -> String {
        if entries.is_empty() {
            return "No entries found.".to_string();
        }

        let mut output = String::new();
        for entry in entries {
            let mut fields = vec![entry.id.to_string(), format!("[{}]", checked_mark(entry))];
            if mode.shows_text() {
                fields.push(entry.text.clone());
            }
            if mode.shows_meaning() {
                fields.push(entry.meaning.clone());
            }
            fields.push(entry.subject.to_string());
            output.push_str(&fields.join("\t"));
            output.push('\n');
        }
        output
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_summary(&self, summary: &QuizSummary, tested: &[Entry]) -> String {
        let mut output = format!(
            "{}/{} {}%\n",
            summary.score, summary.total_questions, summary.accuracy
        );
        for entry in tested {
            output.push_str(&format!("[{}] {}\n", checked_mark(entry), entry.text));
        }
        output
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
