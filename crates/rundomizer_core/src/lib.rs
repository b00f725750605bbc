//! # rundomizer_core: Unbiased Sampling for Random-Value Generators
//!
//! ## Role
//!
//! rundomizer_core is the computational layer behind every Rundomizer
//! generator. It provides:
//! - The unbiased sampler and its entropy sources (`sampler`)
//! - Request, result and error types (`types`)
//! - The generator family: numbers, words, names, nicknames, quotes, coin,
//!   dice and lottery (`generators`)
//! - Built-in and file-backed dictionaries (`dictionary`)
//! - Chi-square uniformity statistics (`stats`)
//!
//! ## Bias Policy
//!
//! Raw entropy is drawn as 32-bit words (64-bit for ranges wider than
//! `2^32`). [`BiasPolicy::Modulo`] maps `raw % R` and is slightly biased when
//! `R` does not divide the raw space; [`BiasPolicy::Rejection`] redraws raw
//! values that fall in the excess region and is exactly uniform.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rundomizer_core::sampler::{Sampler, SeededEntropy};
//! use rundomizer_core::types::SampleRequest;
//!
//! let mut sampler = Sampler::new(SeededEntropy::from_seed(7));
//!
//! let die = sampler.sample_int(1, 6).unwrap();
//! assert!((1..=6).contains(&die));
//!
//! let names = ["Иван", "Пётр", "Анна"];
//! let picked = sampler.sample_pick(&names).unwrap();
//! assert!(names.contains(picked));
//!
//! let request = SampleRequest::range(1, 6).with_count(2).with_limit(6);
//! let roll = sampler.sample_many(&request).unwrap();
//! assert_eq!(roll.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod dictionary;
pub mod generators;
pub mod sampler;
pub mod stats;
pub mod types;

pub use sampler::{BiasPolicy, EntropySource, OsEntropy, Sampler, SeededEntropy};
pub use types::{SampleError, SampleRequest, SampleResult};
