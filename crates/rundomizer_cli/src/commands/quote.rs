//! Quote command.

use rundomizer_core::generators::{Generator, QuoteGenerator};

use crate::output::render;
use crate::session::Session;
use crate::Result;

/// Run the quote command
pub fn run(session: &mut Session) -> Result<String> {
    let quote = QuoteGenerator::new(&session.dictionary).generate(&mut session.sampler)?;
    render(&quote, session.format)
}
