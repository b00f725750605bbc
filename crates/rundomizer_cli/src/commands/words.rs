//! Words command.

use rundomizer_core::generators::{Generator, WordGenerator};

use crate::output::render;
use crate::session::Session;
use crate::Result;

/// Run the words command
pub fn run(session: &mut Session, count: usize) -> Result<String> {
    let words = WordGenerator::new(&session.dictionary, count).generate(&mut session.sampler)?;
    render(&words, session.format)
}
