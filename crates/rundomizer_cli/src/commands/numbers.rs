//! Number commands.

use rundomizer_core::generators::{Generator, NumberGenerator, SingleNumberGenerator};
use tracing::info;

use crate::output::render;
use crate::session::Session;
use crate::Result;

/// Run the numbers command: `count` integers in `[from, to]`.
pub fn run(session: &mut Session, from: i64, to: i64, count: usize) -> Result<String> {
    info!(from, to, count, "generating numbers");
    let numbers = NumberGenerator::new(from, to, count).generate(&mut session.sampler)?;
    render(&numbers, session.format)
}

/// Run the number command: one integer in `[1, 100]`.
pub fn run_single(session: &mut Session) -> Result<String> {
    let number = SingleNumberGenerator.generate(&mut session.sampler)?;
    render(&number, session.format)
}
