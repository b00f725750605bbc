//! Bias policy: how a raw draw is mapped onto a domain of size `R`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mapping from a raw draw onto a domain of size `R`.
///
/// # Variants
/// - `Modulo`: `raw % R`. Slightly biased whenever `R` does not divide the raw
///   space; for `R <= 100_000` against `2^32` the excess probability of any
///   value is below `R / 2^32 ≈ 2.3e-5`.
/// - `Rejection`: redraws while `raw` lies in `[space - space % R, space)`,
///   then maps `raw % R`. Exactly uniform; expected draws per pick are below 2.
///
/// `Modulo` is the default.
///
/// # Examples
/// ```
/// use rundomizer_core::sampler::BiasPolicy;
///
/// let policy: BiasPolicy = "rejection".parse().unwrap();
/// assert_eq!(policy, BiasPolicy::Rejection);
/// assert_eq!(policy.to_string(), "rejection");
/// assert_eq!(BiasPolicy::default(), BiasPolicy::Modulo);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasPolicy {
    /// Approximate uniformity via `raw % R`
    #[default]
    Modulo,
    /// Exact uniformity via rejection of the excess region
    Rejection,
}

impl BiasPolicy {
    /// Returns the policy name as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasPolicy::Modulo => "modulo",
            BiasPolicy::Rejection => "rejection",
        }
    }

    /// Returns `true` if the policy guarantees exact uniformity.
    pub fn is_exact(&self) -> bool {
        matches!(self, BiasPolicy::Rejection)
    }
}

impl fmt::Display for BiasPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiasPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modulo" => Ok(BiasPolicy::Modulo),
            "rejection" => Ok(BiasPolicy::Rejection),
            other => Err(format!(
                "Unknown bias policy '{}'. Supported: modulo, rejection",
                other
            )),
        }
    }
}
