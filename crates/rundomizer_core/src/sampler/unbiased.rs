//! The unbiased sampler.
//!
//! [`Sampler`] owns an [`EntropySource`] and a [`BiasPolicy`]. All
//! preconditions are checked before the first raw draw, so a declined request
//! consumes no entropy and never yields a partial result.

use tracing::{debug, trace};

use super::entropy::{EntropySource, OsEntropy};
use super::policy::BiasPolicy;
use crate::types::{Pick, SampleDomain, SampleError, SampleRequest, SampleResult, MAX_SAMPLE_COUNT};

const SPACE_32: u128 = 1 << 32;
const SPACE_64: u128 = 1 << 64;

/// Uniform sampler over integer ranges and candidate lists.
///
/// # Examples
///
/// ```rust
/// use rundomizer_core::sampler::{Sampler, SeededEntropy};
/// use rundomizer_core::types::SampleError;
///
/// let mut sampler = Sampler::new(SeededEntropy::from_seed(42));
///
/// assert!((1..=6).contains(&sampler.sample_int(1, 6).unwrap()));
/// assert_eq!(
///     sampler.sample_int(10, 1),
///     Err(SampleError::InvalidRange { min: 10, max: 1 })
/// );
///
/// let empty: [&str; 0] = [];
/// assert_eq!(sampler.sample_pick(&empty), Err(SampleError::EmptyList));
/// ```
#[derive(Debug, Clone)]
pub struct Sampler<E = OsEntropy> {
    source: E,
    policy: BiasPolicy,
}

impl Sampler<OsEntropy> {
    /// Creates a sampler over the system CSPRNG with the default policy.
    pub fn from_os() -> Self {
        Self::new(OsEntropy::new())
    }
}

impl Default for Sampler<OsEntropy> {
    fn default() -> Self {
        Self::from_os()
    }
}

impl<E: EntropySource> Sampler<E> {
    /// Creates a sampler over `source` with [`BiasPolicy::Modulo`].
    pub fn new(source: E) -> Self {
        Self {
            source,
            policy: BiasPolicy::default(),
        }
    }

    /// Replaces the bias policy.
    pub fn with_policy(mut self, policy: BiasPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active bias policy.
    pub fn policy(&self) -> BiasPolicy {
        self.policy
    }

    /// The underlying entropy source.
    pub fn source(&self) -> &E {
        &self.source
    }

    /// Consumes the sampler, returning the entropy source.
    pub fn into_source(self) -> E {
        self.source
    }

    /// Draws an index in `0..len`, each index equally likely.
    ///
    /// # Errors
    ///
    /// [`SampleError::EmptyList`] if `len == 0`.
    pub fn sample_index(&mut self, len: usize) -> Result<usize, SampleError> {
        if len == 0 {
            return Err(SampleError::EmptyList);
        }
        let offset = self.draw_below(len as u128)?;
        Ok(offset as usize)
    }

    /// Draws an integer in the inclusive range `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] unless `min < max`.
    pub fn sample_int(&mut self, min: i64, max: i64) -> Result<i64, SampleError> {
        let domain: SampleDomain<'_, ()> = SampleDomain::Range { min, max };
        domain.validate()?;
        self.draw_in_range(min, domain.size())
    }

    /// Draws one element of `items`, each index equally likely.
    ///
    /// # Errors
    ///
    /// [`SampleError::EmptyList`] if `items` is empty.
    pub fn sample_pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, SampleError> {
        let index = self.sample_index(items.len())?;
        Ok(&items[index])
    }

    /// Draws `request.count()` independent picks, with replacement.
    ///
    /// # Errors
    ///
    /// Domain and count errors from [`SampleRequest::validate`], checked
    /// before any entropy is consumed; entropy failures abort the whole
    /// request.
    pub fn sample_many<'a, T>(
        &mut self,
        request: &SampleRequest<'a, T>,
    ) -> Result<SampleResult<'a, T>, SampleError> {
        if let Err(err) = request.validate() {
            debug!(error = %err, "sample request declined");
            return Err(err);
        }

        let mut picks = Vec::with_capacity(request.count());
        match *request.domain() {
            SampleDomain::Range { min, max } => {
                let span = request.domain().size();
                for _ in 0..request.count() {
                    picks.push(Pick::Int(self.draw_in_range(min, span)?));
                }
                trace!(min, max, count = picks.len(), "sampled range");
            }
            SampleDomain::List(items) => {
                for _ in 0..request.count() {
                    picks.push(Pick::Item(self.sample_pick(items)?));
                }
                trace!(candidates = items.len(), count = picks.len(), "sampled list");
            }
        }

        Ok(SampleResult::new(picks))
    }

    /// Draws `count` distinct elements of `items` without replacement.
    ///
    /// Uses a partial Fisher–Yates shuffle over indices: position `i` is
    /// swapped with a uniform position in `i..len`, so every ordered
    /// selection of `count` elements is equally likely.
    ///
    /// # Errors
    ///
    /// - [`SampleError::EmptyList`] if `items` is empty
    /// - [`SampleError::CountOutOfBounds`] if `count` is zero or above [`MAX_SAMPLE_COUNT`]
    /// - [`SampleError::NotEnoughCandidates`] if `count > items.len()`
    pub fn sample_distinct<'a, T>(
        &mut self,
        items: &'a [T],
        count: usize,
    ) -> Result<Vec<&'a T>, SampleError> {
        if items.is_empty() {
            return Err(SampleError::EmptyList);
        }
        if count == 0 || count > MAX_SAMPLE_COUNT {
            return Err(SampleError::CountOutOfBounds {
                requested: count,
                limit: MAX_SAMPLE_COUNT,
            });
        }
        if count > items.len() {
            return Err(SampleError::NotEnoughCandidates {
                requested: count,
                available: items.len(),
            });
        }

        let mut indices: Vec<usize> = (0..items.len()).collect();
        for i in 0..count {
            let j = i + self.sample_index(items.len() - i)?;
            indices.swap(i, j);
        }

        Ok(indices[..count].iter().map(|&i| &items[i]).collect())
    }

    fn draw_in_range(&mut self, min: i64, span: u128) -> Result<i64, SampleError> {
        let offset = self.draw_below(span)?;
        Ok((min as i128 + offset as i128) as i64)
    }

    /// Maps raw entropy onto `0..span`, for `1 <= span <= 2^64`.
    fn draw_below(&mut self, span: u128) -> Result<u128, SampleError> {
        debug_assert!(span >= 1 && span <= SPACE_64);

        let space = if span <= SPACE_32 { SPACE_32 } else { SPACE_64 };
        match self.policy {
            BiasPolicy::Modulo => Ok(self.draw_raw(space)? % span),
            BiasPolicy::Rejection => {
                let zone = space - space % span;
                loop {
                    let raw = self.draw_raw(space)?;
                    if raw < zone {
                        return Ok(raw % span);
                    }
                    trace!(raw = raw as u64, "rejected draw in excess region");
                }
            }
        }
    }

    fn draw_raw(&mut self, space: u128) -> Result<u128, SampleError> {
        if space == SPACE_32 {
            Ok(u128::from(self.source.next_u32()?))
        } else {
            Ok(u128::from(self.source.next_u64()?))
        }
    }
}
