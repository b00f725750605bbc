//! Lottery: a managed participant list and winner draws.
//!
//! [`Lottery::draw`] picks one winner per invocation with replacement across
//! invocations. Drawing several distinct winners at once is a separate
//! contract, [`Lottery::draw_winners`], backed by
//! [`Sampler::sample_distinct`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::{Generator, GeneratorError, ShareText};
use crate::sampler::{EntropySource, Sampler};

/// Maximum participants on one list.
pub const MAX_PARTICIPANTS: usize = 1000;

/// Participant list for a lottery draw.
///
/// # Examples
/// ```
/// use rundomizer_core::generators::{Lottery, ShareText};
/// use rundomizer_core::sampler::{Sampler, SeededEntropy};
///
/// let mut lottery = Lottery::new();
/// lottery.add("  Анна ").unwrap();
/// lottery.add("Пётр").unwrap();
/// assert!(lottery.add("Анна").is_err());
///
/// let mut sampler = Sampler::new(SeededEntropy::from_seed(5));
/// let draw = lottery.draw(&mut sampler).unwrap();
/// assert!(draw.share_text().starts_with("Победитель жребия: "));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lottery {
    participants: Vec<String>,
}

impl Lottery {
    /// Creates an empty lottery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lottery, adding each name in order.
    ///
    /// # Errors
    ///
    /// The first error [`Lottery::add`] reports.
    pub fn from_participants<I, S>(names: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lottery = Self::new();
        for name in names {
            lottery.add(name.as_ref())?;
        }
        Ok(lottery)
    }

    /// Adds a participant after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::EmptyParticipant`] if the trimmed name is empty
    /// - [`GeneratorError::DuplicateParticipant`] if the name is already listed
    /// - [`GeneratorError::TooManyParticipants`] if the list is full
    pub fn add(&mut self, name: &str) -> Result<(), GeneratorError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GeneratorError::EmptyParticipant);
        }
        if self.participants.iter().any(|p| p == trimmed) {
            return Err(GeneratorError::DuplicateParticipant(trimmed.to_string()));
        }
        if self.participants.len() >= MAX_PARTICIPANTS {
            return Err(GeneratorError::TooManyParticipants {
                limit: MAX_PARTICIPANTS,
            });
        }
        self.participants.push(trimmed.to_string());
        debug!(participant = trimmed, total = self.participants.len(), "participant added");
        Ok(())
    }

    /// Removes and returns the participant at `index`.
    pub fn remove(&mut self, index: usize) -> Result<String, GeneratorError> {
        if index >= self.participants.len() {
            return Err(GeneratorError::NoSuchParticipant(index));
        }
        Ok(self.participants.remove(index))
    }

    /// Removes all participants.
    pub fn clear(&mut self) {
        self.participants.clear();
    }

    /// Participants in insertion order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Returns `true` if there are no participants.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Draws one winner.
    pub fn draw<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<LotteryDraw, GeneratorError> {
        let winner = sampler.sample_pick(&self.participants)?;
        Ok(LotteryDraw {
            winners: vec![winner.clone()],
            participants: self.participants.len(),
            created_at: Utc::now(),
        })
    }

    /// Draws `count` distinct winners, in draw order.
    pub fn draw_winners<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
        count: usize,
    ) -> Result<LotteryDraw, GeneratorError> {
        let winners = sampler
            .sample_distinct(&self.participants, count)?
            .into_iter()
            .cloned()
            .collect();
        Ok(LotteryDraw {
            winners,
            participants: self.participants.len(),
            created_at: Utc::now(),
        })
    }
}

/// Result of a lottery draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotteryDraw {
    /// Winners in draw order
    pub winners: Vec<String>,
    /// Size of the participant list at draw time
    pub participants: usize,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ShareText for LotteryDraw {
    fn share_text(&self) -> String {
        match self.winners.as_slice() {
            [winner] => format!("Победитель жребия: {}", winner),
            winners => format!("Победители жребия: {}", winners.join(", ")),
        }
    }
}

impl Generator for Lottery {
    type Output = LotteryDraw;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<LotteryDraw, GeneratorError> {
        self.draw(sampler)
    }
}
