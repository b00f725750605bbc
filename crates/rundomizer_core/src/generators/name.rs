//! Random given-name generator.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Generator, GeneratorError, ShareText};
use crate::dictionary::Dictionary;
use crate::sampler::{EntropySource, Sampler};

/// Grammatical gender of a given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male names
    Male,
    /// Female names
    Female,
}

impl Gender {
    /// Russian adjective used in share texts ("мужское" / "женское").
    pub fn adjective(&self) -> &'static str {
        match self {
            Gender::Male => "мужское",
            Gender::Female => "женское",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!(
                "Unknown gender '{}'. Supported: male, female",
                other
            )),
        }
    }
}

/// Draws one given name.
///
/// With no gender requested, the gender is chosen first by a fair two-way
/// draw (even index: male), then a name is drawn from that table. Each table
/// therefore receives half the probability regardless of its size.
#[derive(Debug, Clone, Copy)]
pub struct NameGenerator<'d> {
    dictionary: &'d Dictionary,
    gender: Option<Gender>,
}

impl<'d> NameGenerator<'d> {
    /// Creates a generator; `None` means any gender.
    pub fn new(dictionary: &'d Dictionary, gender: Option<Gender>) -> Self {
        Self { dictionary, gender }
    }
}

/// A generated name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedName {
    /// The name
    pub name: String,
    /// Gender of the table it came from
    pub gender: Gender,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ShareText for GeneratedName {
    fn share_text(&self) -> String {
        format!("Случайное {} имя: {}", self.gender.adjective(), self.name)
    }
}

impl Generator for NameGenerator<'_> {
    type Output = GeneratedName;

    fn generate<E: EntropySource>(
        &self,
        sampler: &mut Sampler<E>,
    ) -> Result<GeneratedName, GeneratorError> {
        let gender = match self.gender {
            Some(gender) => gender,
            None if sampler.sample_index(2)? == 0 => Gender::Male,
            None => Gender::Female,
        };
        let table = match gender {
            Gender::Male => self.dictionary.male_names(),
            Gender::Female => self.dictionary.female_names(),
        };
        let name = sampler.sample_pick(table)?.clone();
        Ok(GeneratedName {
            name,
            gender,
            created_at: Utc::now(),
        })
    }
}
