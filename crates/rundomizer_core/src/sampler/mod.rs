//! # Unbiased Sampler
//!
//! This module turns raw entropy into uniformly distributed picks from an
//! integer range or a finite candidate list. Every generator in
//! [`crate::generators`] draws through [`Sampler`].
//!
//! ## Module Structure
//!
//! - [`entropy`]: the [`EntropySource`] trait with OS, seeded and fixed-sequence sources
//! - [`policy`]: [`BiasPolicy`], the mapping from raw draws onto a domain
//! - [`unbiased`]: the [`Sampler`] itself
//!
//! ## Raw Draw Width
//!
//! Domains of at most `2^32` values consume one 32-bit word per draw. Wider
//! integer ranges consume a 64-bit word (two 32-bit words for sequence-backed
//! sources).
//!
//! ## Usage Example
//!
//! ```rust
//! use rundomizer_core::sampler::{BiasPolicy, Sampler, SeededEntropy};
//!
//! let mut sampler = Sampler::new(SeededEntropy::from_seed(12345))
//!     .with_policy(BiasPolicy::Rejection);
//!
//! let value = sampler.sample_int(1, 100).unwrap();
//! assert!((1..=100).contains(&value));
//! ```

pub mod entropy;
pub mod policy;
pub mod unbiased;

pub use entropy::{EntropySource, OsEntropy, SeededEntropy, SequenceEntropy};
pub use policy::BiasPolicy;
pub use unbiased::Sampler;
