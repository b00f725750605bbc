//! Coin flip.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Generator, GeneratorError, ShareText};
use crate::sampler::{EntropySource, Sampler};

/// Side a coin landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    /// Heads ("Орёл")
    Heads,
    /// Tails ("Решка")
    Tails,
}

impl CoinSide {
    /// Russian name of the side.
    pub fn label(&self) -> &'static str {
        match self {
            CoinSide::Heads => "Орёл",
            CoinSide::Tails => "Решка",
        }
    }
}

impl fmt::Display for CoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fair coin: an even two-way draw is heads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinFlip;

/// Result of a coin flip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinToss {
    /// Side the coin landed on
    pub side: CoinSide,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ShareText for CoinToss {
    fn share_text(&self) -> String {
        format!("Результат броска монеты: {}", self.side)
    }
}

impl Generator for CoinFlip {
    type Output = CoinToss;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<CoinToss, GeneratorError> {
        let side = if sampler.sample_index(2)? == 0 {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        };
        Ok(CoinToss {
            side,
            created_at: Utc::now(),
        })
    }
}
