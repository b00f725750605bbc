//! Random quote generator.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Generator, GeneratorError, ShareText};
use crate::dictionary::{Dictionary, Quote};
use crate::sampler::{EntropySource, Sampler};

/// Draws one quote from the dictionary.
#[derive(Debug, Clone, Copy)]
pub struct QuoteGenerator<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> QuoteGenerator<'d> {
    /// Creates a quote generator.
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }
}

/// A generated quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedQuote {
    /// The quote
    pub quote: Quote,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ShareText for GeneratedQuote {
    fn share_text(&self) -> String {
        format!("\"{}\" — {}", self.quote.text, self.quote.author)
    }
}

impl Generator for QuoteGenerator<'_> {
    type Output = GeneratedQuote;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<GeneratedQuote, GeneratorError> {
        let quote = sampler.sample_pick(self.dictionary.quotes())?.clone();
        Ok(GeneratedQuote {
            quote,
            created_at: Utc::now(),
        })
    }
}
