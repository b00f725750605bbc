//! Name and nickname commands.

use rundomizer_core::generators::{Gender, Generator, NameGenerator, NicknameGenerator};

use crate::output::render;
use crate::session::Session;
use crate::Result;

/// Run the name command; `None` picks the gender at random.
pub fn run(session: &mut Session, gender: Option<Gender>) -> Result<String> {
    let name = NameGenerator::new(&session.dictionary, gender).generate(&mut session.sampler)?;
    render(&name, session.format)
}

/// Run the nickname command
pub fn run_nicknames(session: &mut Session, count: usize) -> Result<String> {
    let nicknames =
        NicknameGenerator::new(&session.dictionary, count).generate(&mut session.sampler)?;
    render(&nicknames, session.format)
}
