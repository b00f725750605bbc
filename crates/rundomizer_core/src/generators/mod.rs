//! Random-value generators built on the sampler.
//!
//! Each generator validates its own caller cap, draws through a [`Sampler`],
//! and returns an output stamped with its creation time. Outputs render a
//! human-readable share text via [`ShareText`].
//!
//! | Generator | Domain | Cap |
//! |---|---|---|
//! | [`NumberGenerator`] | `[from, to]` | 1000 numbers |
//! | [`SingleNumberGenerator`] | `[1, 100]` | 1 |
//! | [`WordGenerator`] | word table | 10 words |
//! | [`NameGenerator`] | male/female name tables | 1 |
//! | [`NicknameGenerator`] | nickname fragments, 5 formats | 5 nicknames |
//! | [`QuoteGenerator`] | quote table | 1 |
//! | [`CoinFlip`] | heads/tails | 1 |
//! | [`DiceRoll`] | `[1, 6]` per die | 6 dice |
//! | [`Lottery`] | participant list | 1000 participants |

pub mod coin;
pub mod dice;
pub mod lottery;
pub mod name;
pub mod nickname;
pub mod number;
pub mod quote;
pub mod word;

pub use coin::{CoinFlip, CoinSide, CoinToss};
pub use dice::{DiceRoll, DiceRollResult};
pub use lottery::{Lottery, LotteryDraw};
pub use name::{Gender, GeneratedName, NameGenerator};
pub use nickname::{GeneratedNicknames, NicknameFormat, NicknameGenerator};
pub use number::{GeneratedNumber, GeneratedNumbers, NumberGenerator, SingleNumberGenerator};
pub use quote::{GeneratedQuote, QuoteGenerator};
pub use word::{GeneratedWords, WordGenerator};

use serde::Serialize;
use thiserror::Error;

use crate::sampler::{EntropySource, Sampler};
use crate::types::SampleError;

/// Errors from generators, wrapping sampler errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The underlying sample request was declined.
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// Participant name is empty after trimming.
    #[error("Participant name is empty")]
    EmptyParticipant,

    /// Participant is already on the list.
    #[error("Participant already added: {0}")]
    DuplicateParticipant(String),

    /// Participant list is full.
    #[error("Participant list is full (maximum {limit})")]
    TooManyParticipants {
        /// Maximum number of participants
        limit: usize,
    },

    /// No participant at the given index.
    #[error("No participant at index {0}")]
    NoSuchParticipant(usize),
}

/// Human-readable text for copying or sharing a result.
pub trait ShareText {
    /// Renders the share text.
    fn share_text(&self) -> String;
}

/// A generator producing one output per invocation.
pub trait Generator {
    /// The value produced.
    type Output: Serialize + ShareText;

    /// Draws a fresh output.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::Sample`] if the request is declined or entropy fails.
    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<Self::Output, GeneratorError>;
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_error_transparent() {
        let err: GeneratorError = SampleError::EmptyList.into();
        assert_eq!(err.to_string(), SampleError::EmptyList.to_string());
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(join::<i64>(&[]), "");
    }
}
