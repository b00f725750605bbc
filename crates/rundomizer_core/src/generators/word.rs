//! Random word generator.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Generator, GeneratorError, ShareText};
use crate::dictionary::Dictionary;
use crate::sampler::{EntropySource, Sampler};
use crate::types::SampleRequest;

/// Maximum words per draw.
pub const MAX_WORDS: usize = 10;

/// Draws `count` words from the dictionary, with replacement.
#[derive(Debug, Clone, Copy)]
pub struct WordGenerator<'d> {
    dictionary: &'d Dictionary,
    count: usize,
}

impl<'d> WordGenerator<'d> {
    /// Creates a generator drawing `count` words.
    pub fn new(dictionary: &'d Dictionary, count: usize) -> Self {
        Self { dictionary, count }
    }
}

/// Generated words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedWords {
    /// Words in draw order
    pub words: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ShareText for GeneratedWords {
    fn share_text(&self) -> String {
        format!("Случайные слова: {}", self.words.join(", "))
    }
}

impl Generator for WordGenerator<'_> {
    type Output = GeneratedWords;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<GeneratedWords, GeneratorError> {
        let request = SampleRequest::list(self.dictionary.words())
            .with_count(self.count)
            .with_limit(MAX_WORDS);
        let result = sampler.sample_many(&request)?;
        Ok(GeneratedWords {
            words: result.items().into_iter().cloned().collect(),
            created_at: result.created_at(),
        })
    }
}
