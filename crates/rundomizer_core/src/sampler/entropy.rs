//! Entropy sources feeding the sampler.
//!
//! - [`OsEntropy`]: system CSPRNG via `rand::rngs::OsRng` (production)
//! - [`SeededEntropy`]: `rand::rngs::StdRng` seeded from a `u64` (reproducible runs)
//! - [`SequenceEntropy`]: replays fixed raw values (exact policy tests)

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::types::SampleError;

/// Source of uniformly distributed raw words.
pub trait EntropySource {
    /// Draws one uniformly distributed 32-bit word.
    fn next_u32(&mut self) -> Result<u32, SampleError>;

    /// Draws one uniformly distributed 64-bit word.
    ///
    /// The default combines two 32-bit draws, high word first.
    fn next_u64(&mut self) -> Result<u64, SampleError> {
        let high = u64::from(self.next_u32()?);
        let low = u64::from(self.next_u32()?);
        Ok((high << 32) | low)
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn next_u32(&mut self) -> Result<u32, SampleError> {
        (**self).next_u32()
    }

    fn next_u64(&mut self) -> Result<u64, SampleError> {
        (**self).next_u64()
    }
}

/// Operating-system CSPRNG.
///
/// Stateless apart from the OS handle, so it is cheap to construct per
/// request. Failures of the underlying source are reported as
/// [`SampleError::Entropy`] rather than panicking.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy {
    inner: OsRng,
}

impl OsEntropy {
    /// Creates a handle to the system CSPRNG.
    pub fn new() -> Self {
        Self { inner: OsRng }
    }

    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), SampleError> {
        self.inner
            .try_fill_bytes(buffer)
            .map_err(|e| SampleError::Entropy(e.to_string()))
    }
}

impl EntropySource for OsEntropy {
    fn next_u32(&mut self) -> Result<u32, SampleError> {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn next_u64(&mut self) -> Result<u64, SampleError> {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }
}

/// Seeded generator for reproducible sampling.
///
/// The same seed always yields the same sequence of draws. The seed is kept
/// for logging.
///
/// # Examples
///
/// ```rust
/// use rundomizer_core::sampler::{EntropySource, SeededEntropy};
///
/// let mut a = SeededEntropy::from_seed(42);
/// let mut b = SeededEntropy::from_seed(42);
/// assert_eq!(a.next_u32().unwrap(), b.next_u32().unwrap());
/// assert_eq!(a.seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    inner: StdRng,
    seed: u64,
}

impl SeededEntropy {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntropySource for SeededEntropy {
    #[inline]
    fn next_u32(&mut self) -> Result<u32, SampleError> {
        Ok(self.inner.next_u32())
    }

    #[inline]
    fn next_u64(&mut self) -> Result<u64, SampleError> {
        Ok(self.inner.next_u64())
    }
}

/// Replays a fixed sequence of raw 32-bit words, cycling at the end.
///
/// Intended for tests that need to observe exactly how a raw value is mapped.
/// 64-bit draws use the default high-then-low combination.
///
/// # Examples
///
/// ```rust
/// use rundomizer_core::sampler::{EntropySource, SequenceEntropy};
///
/// let mut source = SequenceEntropy::new(vec![7, 9]);
/// assert_eq!(source.next_u32().unwrap(), 7);
/// assert_eq!(source.next_u32().unwrap(), 9);
/// assert_eq!(source.next_u32().unwrap(), 7);
/// assert_eq!(source.draws(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceEntropy {
    values: Vec<u32>,
    draws: usize,
}

impl SequenceEntropy {
    /// Creates a source replaying `values`.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, draws: 0 }
    }

    /// Number of 32-bit words consumed so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl EntropySource for SequenceEntropy {
    fn next_u32(&mut self) -> Result<u32, SampleError> {
        if self.values.is_empty() {
            return Err(SampleError::Entropy("sequence is empty".to_string()));
        }
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;
        Ok(value)
    }
}
