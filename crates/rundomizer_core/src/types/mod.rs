//! Request, result and error types shared by the sampler and generators.
//!
//! This module provides:
//! - `request`: [`SampleDomain`] and [`SampleRequest`] describing what to draw
//! - `result`: [`Pick`] and [`SampleResult`] holding what was drawn
//! - `error`: [`SampleError`] for declined requests

pub mod error;
pub mod request;
pub mod result;

pub use error::SampleError;
pub use request::{SampleDomain, SampleRequest, MAX_SAMPLE_COUNT};
pub use result::{Pick, SampleResult};
