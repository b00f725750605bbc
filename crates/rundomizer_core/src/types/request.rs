//! Sample requests: what domain to draw from and how many times.

use super::error::SampleError;

/// Global ceiling on the number of picks in a single request.
///
/// Callers may lower it with [`SampleRequest::with_limit`] but never raise it.
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Domain a pick is drawn from.
///
/// `Range` bounds are inclusive on both ends. `List` borrows the candidates;
/// picks reference elements of the list rather than copying them.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleDomain<'a, T> {
    /// Inclusive integer range `[min, max]`.
    Range {
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
    },
    /// Finite ordered candidate list.
    List(&'a [T]),
}

impl<T> SampleDomain<'_, T> {
    /// Number of distinct values in the domain.
    ///
    /// Returned as `u128` so that the full `i64` range (`2^64` values) fits.
    pub fn size(&self) -> u128 {
        match self {
            SampleDomain::Range { min, max } => {
                if min > max {
                    0
                } else {
                    (*max as i128 - *min as i128 + 1) as u128
                }
            }
            SampleDomain::List(items) => items.len() as u128,
        }
    }

    /// Checks the domain preconditions without consuming entropy.
    ///
    /// Ranges require `min < max`; a single-value range is rejected.
    pub fn validate(&self) -> Result<(), SampleError> {
        match self {
            SampleDomain::Range { min, max } if min >= max => Err(SampleError::InvalidRange {
                min: *min,
                max: *max,
            }),
            SampleDomain::List(items) if items.is_empty() => Err(SampleError::EmptyList),
            _ => Ok(()),
        }
    }
}

/// A request for `count` independent picks from a domain.
///
/// # Examples
/// ```
/// use rundomizer_core::types::{SampleRequest, MAX_SAMPLE_COUNT};
///
/// let dice = SampleRequest::range(1, 6).with_count(2).with_limit(6);
/// assert_eq!(dice.count(), 2);
/// assert_eq!(dice.limit(), 6);
/// assert!(dice.validate().is_ok());
///
/// let words = ["кот", "дом"];
/// let request = SampleRequest::list(&words).with_limit(1_000_000);
/// assert_eq!(request.limit(), MAX_SAMPLE_COUNT);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRequest<'a, T> {
    domain: SampleDomain<'a, T>,
    count: usize,
    limit: usize,
}

impl SampleRequest<'static, i64> {
    /// Creates a single-pick request over the inclusive range `[min, max]`.
    pub fn range(min: i64, max: i64) -> Self {
        Self {
            domain: SampleDomain::Range { min, max },
            count: 1,
            limit: MAX_SAMPLE_COUNT,
        }
    }
}

impl<'a, T> SampleRequest<'a, T> {
    /// Creates a single-pick request over a candidate list.
    pub fn list(items: &'a [T]) -> Self {
        Self {
            domain: SampleDomain::List(items),
            count: 1,
            limit: MAX_SAMPLE_COUNT,
        }
    }

    /// Sets the number of picks.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the caller-defined cap on `count`, clamped to [`MAX_SAMPLE_COUNT`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_SAMPLE_COUNT);
        self
    }

    /// The requested domain.
    pub fn domain(&self) -> &SampleDomain<'a, T> {
        &self.domain
    }

    /// The requested number of picks.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The effective count limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Checks domain and count preconditions.
    pub fn validate(&self) -> Result<(), SampleError> {
        self.domain.validate()?;
        if self.count == 0 || self.count > self.limit {
            return Err(SampleError::CountOutOfBounds {
                requested: self.count,
                limit: self.limit,
            });
        }
        Ok(())
    }
}
