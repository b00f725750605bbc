//! Nickname generator: adjective, noun and number fragments in one of five layouts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Generator, GeneratorError, ShareText};
use crate::dictionary::Dictionary;
use crate::sampler::{EntropySource, Sampler};
use crate::types::SampleError;

/// Maximum nicknames per draw.
pub const MAX_NICKNAMES: usize = 5;

/// Layout of the fragments in a nickname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NicknameFormat {
    /// `SwiftWolf42`
    AdjectiveNounNumber,
    /// `Swift_Wolf_42`
    Underscored,
    /// `SwiftWolf`
    AdjectiveNoun,
    /// `Wolf42`
    NounNumber,
    /// `Swift42`
    AdjectiveNumber,
}

impl NicknameFormat {
    /// All layouts, in draw-index order.
    pub const ALL: [NicknameFormat; 5] = [
        NicknameFormat::AdjectiveNounNumber,
        NicknameFormat::Underscored,
        NicknameFormat::AdjectiveNoun,
        NicknameFormat::NounNumber,
        NicknameFormat::AdjectiveNumber,
    ];

    /// Assembles a nickname from its fragments.
    pub fn render(&self, adjective: &str, noun: &str, number: &str) -> String {
        match self {
            NicknameFormat::AdjectiveNounNumber => format!("{}{}{}", adjective, noun, number),
            NicknameFormat::Underscored => format!("{}_{}_{}", adjective, noun, number),
            NicknameFormat::AdjectiveNoun => format!("{}{}", adjective, noun),
            NicknameFormat::NounNumber => format!("{}{}", noun, number),
            NicknameFormat::AdjectiveNumber => format!("{}{}", adjective, number),
        }
    }
}

/// Draws `count` nicknames.
///
/// Each nickname draws an adjective, a noun and a number independently, then
/// a layout uniformly from [`NicknameFormat::ALL`].
#[derive(Debug, Clone, Copy)]
pub struct NicknameGenerator<'d> {
    dictionary: &'d Dictionary,
    count: usize,
}

impl<'d> NicknameGenerator<'d> {
    /// Creates a generator drawing `count` nicknames.
    pub fn new(dictionary: &'d Dictionary, count: usize) -> Self {
        Self { dictionary, count }
    }

    fn one<E: EntropySource>(&self, sampler: &mut Sampler<E>) -> Result<String, SampleError> {
        let adjective = sampler.sample_pick(self.dictionary.adjectives())?;
        let noun = sampler.sample_pick(self.dictionary.nouns())?;
        let number = sampler.sample_pick(self.dictionary.numbers())?;
        let format = sampler.sample_pick(&NicknameFormat::ALL)?;
        Ok(format.render(adjective, noun, number))
    }
}

/// Generated nicknames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedNicknames {
    /// Nicknames in draw order
    pub nicknames: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ShareText for GeneratedNicknames {
    fn share_text(&self) -> String {
        format!("Случайные никнеймы: {}", self.nicknames.join(", "))
    }
}

impl Generator for NicknameGenerator<'_> {
    type Output = GeneratedNicknames;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<GeneratedNicknames, GeneratorError> {
        if self.count == 0 || self.count > MAX_NICKNAMES {
            return Err(SampleError::CountOutOfBounds {
                requested: self.count,
                limit: MAX_NICKNAMES,
            }
            .into());
        }
        let nicknames = (0..self.count)
            .map(|_| self.one(sampler))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GeneratedNicknames {
            nicknames,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{SeededEntropy, SequenceEntropy};

    #[test]
    fn test_render_formats() {
        let rendered: Vec<String> = NicknameFormat::ALL
            .iter()
            .map(|f| f.render("Swift", "Wolf", "42"))
            .collect();
        assert_eq!(
            rendered,
            vec!["SwiftWolf42", "Swift_Wolf_42", "SwiftWolf", "Wolf42", "Swift42"]
        );
    }

    #[test]
    fn test_fragment_draw_order() {
        let dictionary = Dictionary::from_toml_str(
            r#"
            [nicknames]
            adjectives = ["Swift", "Dark"]
            nouns = ["Wolf", "Fox"]
            numbers = ["7", "42"]
            "#,
        )
        .unwrap();
        // adjective 1 -> Dark, noun 0 -> Wolf, number 1 -> 42, format 1 -> underscored
        let mut sampler = Sampler::new(SequenceEntropy::new(vec![1, 0, 1, 1]));
        let result = NicknameGenerator::new(&dictionary, 1)
            .generate(&mut sampler)
            .unwrap();
        assert_eq!(result.nicknames, vec!["Dark_Wolf_42"]);
        assert_eq!(result.share_text(), "Случайные никнеймы: Dark_Wolf_42");
    }

    #[test]
    fn test_count_and_cap() {
        let dictionary = Dictionary::builtin();
        let mut sampler = Sampler::new(SeededEntropy::from_seed(4));

        let result = NicknameGenerator::new(&dictionary, MAX_NICKNAMES)
            .generate(&mut sampler)
            .unwrap();
        assert_eq!(result.nicknames.len(), MAX_NICKNAMES);
        assert!(result.nicknames.iter().all(|n| !n.is_empty()));

        for count in [0, MAX_NICKNAMES + 1] {
            let err = NicknameGenerator::new(&dictionary, count)
                .generate(&mut sampler)
                .unwrap_err();
            assert!(matches!(err, GeneratorError::Sample(e) if e.is_count_error()));
        }
    }
}
