//! Six-sided dice.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{join, Generator, GeneratorError, ShareText};
use crate::sampler::{EntropySource, Sampler};
use crate::types::SampleRequest;

/// Maximum dice per roll.
pub const MAX_DICE: usize = 6;

/// Faces of a standard die.
const FACES: i64 = 6;

/// Rolls `count` independent six-sided dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    count: usize,
}

impl DiceRoll {
    /// Creates a roll of `count` dice.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for DiceRoll {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Result of a dice roll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiceRollResult {
    /// Face values in roll order, each in `1..=6`
    pub dice: Vec<u8>,
    /// Sum of all faces
    pub total: u32,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl DiceRollResult {
    /// Unicode die faces (⚀–⚅) in roll order.
    pub fn faces(&self) -> String {
        self.dice
            .iter()
            .filter_map(|&d| char::from_u32(0x2680 + u32::from(d) - 1))
            .collect()
    }
}

impl ShareText for DiceRollResult {
    fn share_text(&self) -> String {
        format!("Бросок кости: {} (сумма: {})", join(&self.dice), self.total)
    }
}

impl Generator for DiceRoll {
    type Output = DiceRollResult;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<DiceRollResult, GeneratorError> {
        let request = SampleRequest::range(1, FACES)
            .with_count(self.count)
            .with_limit(MAX_DICE);
        let result = sampler.sample_many(&request)?;
        let dice: Vec<u8> = result.ints().into_iter().map(|d| d as u8).collect();
        let total = dice.iter().map(|&d| u32::from(d)).sum();
        Ok(DiceRollResult {
            dice,
            total,
            created_at: result.created_at(),
        })
    }
}
