//! Candidate tables for the list-based generators.
//!
//! A [`Dictionary`] owns every table the generators draw from. It is built
//! from the compiled-in tables ([`Dictionary::builtin`]) or from a TOML file
//! ([`Dictionary::load`]) in which every table is optional:
//!
//! ```toml
//! male_names = ["Иван", "Пётр"]
//! words = ["кот", "дом"]
//!
//! [[quotes]]
//! text = "Краткость — сестра таланта."
//! author = "Антон Чехов"
//!
//! [nicknames]
//! adjectives = ["Swift"]
//! ```
//!
//! Tables missing from the file fall back to the built-ins; tables present but
//! empty are rejected.

pub mod names;
pub mod nicknames;
pub mod quotes;
pub mod words;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors from loading a dictionary file.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The file could not be read.
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for a dictionary.
    #[error("Failed to parse dictionary: {0}")]
    Parse(String),

    /// A table is present but has no entries.
    #[error("Dictionary table '{0}' is empty")]
    EmptyTable(&'static str),
}

/// A quote with its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text
    pub text: String,
    /// Attributed author
    pub author: String,
}

impl Quote {
    /// Creates a quote.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// All candidate tables used by the generators.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    male_names: Vec<String>,
    female_names: Vec<String>,
    words: Vec<String>,
    quotes: Vec<Quote>,
    adjectives: Vec<String>,
    nouns: Vec<String>,
    numbers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DictionaryFile {
    male_names: Option<Vec<String>>,
    female_names: Option<Vec<String>>,
    words: Option<Vec<String>>,
    quotes: Option<Vec<Quote>>,
    nicknames: Option<NicknameTables>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NicknameTables {
    adjectives: Option<Vec<String>>,
    nouns: Option<Vec<String>>,
    numbers: Option<Vec<String>>,
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

fn merge<T>(
    name: &'static str,
    loaded: Option<Vec<T>>,
    fallback: Vec<T>,
) -> Result<Vec<T>, DictionaryError> {
    match loaded {
        Some(table) if table.is_empty() => Err(DictionaryError::EmptyTable(name)),
        Some(table) => Ok(table),
        None => Ok(fallback),
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Dictionary {
    /// Builds the dictionary from the compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            male_names: owned(names::MALE_NAMES),
            female_names: owned(names::FEMALE_NAMES),
            words: owned(words::WORDS),
            quotes: quotes::QUOTES
                .iter()
                .map(|(text, author)| Quote::new(*text, *author))
                .collect(),
            adjectives: owned(nicknames::ADJECTIVES),
            nouns: owned(nicknames::NOUNS),
            numbers: owned(nicknames::NUMBERS),
        }
    }

    /// Parses a dictionary from TOML text, filling missing tables from the built-ins.
    pub fn from_toml_str(content: &str) -> Result<Self, DictionaryError> {
        let file: DictionaryFile =
            toml::from_str(content).map_err(|e| DictionaryError::Parse(e.to_string()))?;
        let builtin = Self::builtin();
        let nicknames = file.nicknames.unwrap_or_default();

        Ok(Self {
            male_names: merge("male_names", file.male_names, builtin.male_names)?,
            female_names: merge("female_names", file.female_names, builtin.female_names)?,
            words: merge("words", file.words, builtin.words)?,
            quotes: merge("quotes", file.quotes, builtin.quotes)?,
            adjectives: merge("nicknames.adjectives", nicknames.adjectives, builtin.adjectives)?,
            nouns: merge("nicknames.nouns", nicknames.nouns, builtin.nouns)?,
            numbers: merge("nicknames.numbers", nicknames.numbers, builtin.numbers)?,
        })
    }

    /// Loads a dictionary from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dictionary = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            words = dictionary.words.len(),
            quotes = dictionary.quotes.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Male given names.
    pub fn male_names(&self) -> &[String] {
        &self.male_names
    }

    /// Female given names.
    pub fn female_names(&self) -> &[String] {
        &self.female_names
    }

    /// Common nouns.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Quotes.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Nickname adjectives.
    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    /// Nickname nouns.
    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    /// Nickname numeric suffixes.
    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }
}
