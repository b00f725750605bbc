//! Number generators: a batch over a custom range and a single 1–100 draw.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{join, Generator, GeneratorError, ShareText};
use crate::sampler::{EntropySource, Sampler};
use crate::types::SampleRequest;

/// Maximum numbers per batch.
pub const MAX_NUMBERS: usize = 1000;

/// Draws `count` integers from `[from, to]` with replacement.
///
/// # Examples
/// ```
/// use rundomizer_core::generators::{Generator, NumberGenerator, ShareText};
/// use rundomizer_core::sampler::{Sampler, SeededEntropy};
///
/// let mut sampler = Sampler::new(SeededEntropy::from_seed(1));
/// let numbers = NumberGenerator::new(1, 10, 3).generate(&mut sampler).unwrap();
/// assert_eq!(numbers.values.len(), 3);
/// assert!(numbers.share_text().starts_with("Сгенерированные числа: "));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberGenerator {
    from: i64,
    to: i64,
    count: usize,
}

impl NumberGenerator {
    /// Creates a generator over `[from, to]` drawing `count` numbers.
    pub fn new(from: i64, to: i64, count: usize) -> Self {
        Self { from, to, count }
    }
}

impl Default for NumberGenerator {
    fn default() -> Self {
        Self::new(1, 100, 1)
    }
}

/// A batch of generated numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedNumbers {
    /// Numbers in draw order
    pub values: Vec<i64>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ShareText for GeneratedNumbers {
    fn share_text(&self) -> String {
        format!("Сгенерированные числа: {}", join(&self.values))
    }
}

impl Generator for NumberGenerator {
    type Output = GeneratedNumbers;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<GeneratedNumbers, GeneratorError> {
        let request = SampleRequest::range(self.from, self.to)
            .with_count(self.count)
            .with_limit(MAX_NUMBERS);
        let result = sampler.sample_many(&request)?;
        Ok(GeneratedNumbers {
            values: result.ints(),
            created_at: result.created_at(),
        })
    }
}

/// Draws one integer from `[1, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleNumberGenerator;

impl SingleNumberGenerator {
    /// Lower bound of the draw.
    pub const MIN: i64 = 1;
    /// Upper bound of the draw.
    pub const MAX: i64 = 100;
}

/// A single generated number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedNumber {
    /// The number
    pub value: i64,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ShareText for GeneratedNumber {
    fn share_text(&self) -> String {
        format!("Случайное число: {}", self.value)
    }
}

impl Generator for SingleNumberGenerator {
    type Output = GeneratedNumber;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<GeneratedNumber, GeneratorError> {
        let value = sampler.sample_int(Self::MIN, Self::MAX)?;
        Ok(GeneratedNumber {
            value,
            created_at: Utc::now(),
        })
    }
}
