// Rust guideline compliant 2026-10-19

//! Core data models for Wordbook.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned entry identifier.
pub type EntryId = u64;

/// Part-of-speech tag attached to every entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Subject {
    /// Noun.
    #[default]
    #[serde(rename = "noun")]
    Noun,
    /// Transitive verb.
    #[serde(rename = "t-verb", alias = "transitive-verb")]
    TransitiveVerb,
    /// Intransitive verb.
    #[serde(rename = "i-verb", alias = "intransitive-verb")]
    IntransitiveVerb,
    /// Adjective.
    #[serde(rename = "adjective")]
    Adjective,
    /// Adverb.
    #[serde(rename = "adverb")]
    Adverb,
    /// Idiom or set phrase.
    #[serde(rename = "idiom")]
    Idiom,
}

impl Subject {
    /// Every subject, in display order.
    pub const ALL: [Subject; 6] = [
        Subject::Noun,
        Subject::TransitiveVerb,
        Subject::IntransitiveVerb,
        Subject::Adjective,
        Subject::Adverb,
        Subject::Idiom,
    ];

    /// Returns the canonical token used in storage and CSV files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Noun => "noun",
            Subject::TransitiveVerb => "t-verb",
            Subject::IntransitiveVerb => "i-verb",
            Subject::Adjective => "adjective",
            Subject::Adverb => "adverb",
            Subject::Idiom => "idiom",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Noun => "Noun",
            Subject::TransitiveVerb => "Transitive verb",
            Subject::IntransitiveVerb => "Intransitive verb",
            Subject::Adjective => "Adjective",
            Subject::Adverb => "Adverb",
            Subject::Idiom => "Idiom",
        }
    }

    /// Parses a subject from external data, falling back to `Noun`.
    ///
    /// Used for imported CSV rows and legacy records where an unknown tag
    /// must not reject the whole record.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Deserializes a subject leniently so an unknown or null tag reads as `noun`.
fn deserialize_subject_lenient<'de, D>(deserializer: D) -> std::result::Result<Subject, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token
        .as_deref()
        .map(Subject::parse_lenient)
        .unwrap_or_default())
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "noun" => Ok(Subject::Noun),
            "t-verb" | "transitive-verb" => Ok(Subject::TransitiveVerb),
            "i-verb" | "intransitive-verb" => Ok(Subject::IntransitiveVerb),
            "adjective" => Ok(Subject::Adjective),
            "adverb" => Ok(Subject::Adverb),
            "idiom" => Ok(Subject::Idiom),
            other => Err(Error::InvalidEntry(format!("Unknown subject: {other}"))),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vocabulary entry as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier, immutable after creation.
    pub id: EntryId,
    /// The word or phrase.
    pub text: String,
    /// Its meaning.
    pub meaning: String,
    /// Part-of-speech tag.
    #[serde(default, deserialize_with = "deserialize_subject_lenient")]
    pub subject: Subject,
    /// Whether the entry is marked as learned.
    #[serde(default)]
    pub checked: bool,
}

impl Entry {
    /// Validates the entry data.
    ///
    /// # Errors
    ///
    /// Returns an error if the text or meaning is blank.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.text, &self.meaning)
    }
}

/// Field values for an entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// The word or phrase.
    pub text: String,
    /// Its meaning.
    pub meaning: String,
    /// Part-of-speech tag.
    #[serde(default)]
    pub subject: Subject,
    /// Initial learned state.
    #[serde(default)]
    pub checked: bool,
}

impl EntryDraft {
    /// Creates an unchecked draft.
    pub fn new(text: impl Into<String>, meaning: impl Into<String>, subject: Subject) -> Self {
        Self {
            text: text.into(),
            meaning: meaning.into(),
            subject,
            checked: false,
        }
    }

    /// Trims the text fields and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the text or meaning is empty after trimming.
    pub fn normalized(self) -> Result<Self> {
        let text = self.text.trim().to_string();
        let meaning = self.meaning.trim().to_string();
        validate_fields(&text, &meaning)?;
        Ok(Self {
            text,
            meaning,
            ..self
        })
    }

    /// Validates the draft without modifying it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text or meaning is blank.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.text, &self.meaning)
    }

    /// Converts the draft into an entry with the given id.
    #[must_use]
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            text: self.text,
            meaning: self.meaning,
            subject: self.subject,
            checked: self.checked,
        }
    }
}

/// Partial update applied to an existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    /// Replacement text.
    pub text: Option<String>,
    /// Replacement meaning.
    pub meaning: Option<String>,
    /// Replacement subject.
    pub subject: Option<Subject>,
    /// Replacement learned state.
    pub checked: Option<bool>,
}

impl EntryPatch {
    /// Creates a patch that only sets the learned state.
    #[must_use]
    pub fn checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::default()
        }
    }

    /// Creates a patch replacing the editable fields.
    #[must_use]
    pub fn fields(text: String, meaning: String, subject: Subject) -> Self {
        Self {
            text: Some(text),
            meaning: Some(meaning),
            subject: Some(subject),
            checked: None,
        }
    }

    /// Applies the patch to an entry in place.
    pub fn apply(&self, entry: &mut Entry) {
        if let Some(text) = &self.text {
            entry.text = text.clone();
        }
        if let Some(meaning) = &self.meaning {
            entry.meaning = meaning.clone();
        }
        if let Some(subject) = self.subject {
            entry.subject = subject;
        }
        if let Some(checked) = self.checked {
            entry.checked = checked;
        }
    }
}

fn validate_fields(text: &str, meaning: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::InvalidEntry("Text cannot be empty".to_string()));
    }

    if meaning.trim().is_empty() {
        return Err(Error::InvalidEntry("Meaning cannot be empty".to_string()));
    }

    Ok(())
}
