//! Error types for declined sample requests.
//!
//! Domain and count errors are detected before any entropy is consumed, so a
//! declined request never leaves a partial result behind.

use thiserror::Error;

/// Reasons a sample request is declined.
///
/// # Variants
/// - `EmptyList`: candidate list has no elements
/// - `InvalidRange`: `min >= max`
/// - `CountOutOfBounds`: `count` is zero or above the caller's limit
/// - `NotEnoughCandidates`: distinct draw asks for more items than exist
/// - `HistogramTooLarge`: a uniformity check over more values than it can bucket
/// - `Entropy`: the entropy source failed to produce bytes
///
/// # Examples
/// ```
/// use rundomizer_core::types::SampleError;
///
/// let err = SampleError::InvalidRange { min: 10, max: 1 };
/// assert_eq!(format!("{}", err), "Invalid range: min 10 must be less than max 1");
/// assert!(err.is_invalid_domain());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Candidate list is empty.
    #[error("Invalid domain: candidate list is empty")]
    EmptyList,

    /// Range bounds are inverted or degenerate.
    #[error("Invalid range: min {min} must be less than max {max}")]
    InvalidRange {
        /// Lower bound as requested
        min: i64,
        /// Upper bound as requested
        max: i64,
    },

    /// Requested count is zero or exceeds the limit.
    #[error("Count out of bounds: requested {requested}, allowed 1..={limit}")]
    CountOutOfBounds {
        /// Number of picks requested
        requested: usize,
        /// Largest count the caller allows
        limit: usize,
    },

    /// Distinct draw requested more picks than there are candidates.
    #[error("Not enough candidates: requested {requested} distinct picks from {available}")]
    NotEnoughCandidates {
        /// Number of distinct picks requested
        requested: usize,
        /// Number of candidates available
        available: usize,
    },

    /// Uniformity check domain has more values than the histogram allows.
    #[error("Histogram too large: {size} values exceed the limit of {limit} buckets")]
    HistogramTooLarge {
        /// Number of values in the checked range
        size: u128,
        /// Largest supported bucket count
        limit: usize,
    },

    /// Entropy source failure.
    #[error("Entropy source failure: {0}")]
    Entropy(String),
}

impl SampleError {
    /// Returns `true` for empty-list and inverted/degenerate range errors.
    pub fn is_invalid_domain(&self) -> bool {
        matches!(self, Self::EmptyList | Self::InvalidRange { .. })
    }

    /// Returns `true` for errors caused by the requested count.
    pub fn is_count_error(&self) -> bool {
        matches!(
            self,
            Self::CountOutOfBounds { .. } | Self::NotEnoughCandidates { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SampleError::EmptyList.to_string(),
            "Invalid domain: candidate list is empty"
        );
        assert_eq!(
            SampleError::CountOutOfBounds {
                requested: 1001,
                limit: 1000
            }
            .to_string(),
            "Count out of bounds: requested 1001, allowed 1..=1000"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(SampleError::EmptyList.is_invalid_domain());
        assert!(SampleError::InvalidRange { min: 5, max: 5 }.is_invalid_domain());
        assert!(!SampleError::EmptyList.is_count_error());

        let count = SampleError::CountOutOfBounds {
            requested: 0,
            limit: 10,
        };
        assert!(count.is_count_error());
        assert!(!count.is_invalid_domain());

        let histogram = SampleError::HistogramTooLarge {
            size: 1 << 64,
            limit: 100_000,
        };
        assert!(!histogram.is_invalid_domain());
        assert!(!histogram.is_count_error());

        let entropy = SampleError::Entropy("unavailable".to_string());
        assert!(!entropy.is_invalid_domain());
        assert!(!entropy.is_count_error());
    }
}
