//! Lottery command.

use rundomizer_core::generators::{Generator, Lottery};
use tracing::info;

use crate::output::render;
use crate::session::Session;
use crate::Result;

/// Run the lottery command.
///
/// With `winners` set, draws that many distinct winners; otherwise one.
pub fn run(
    session: &mut Session,
    participants: &[String],
    winners: Option<usize>,
) -> Result<String> {
    let lottery = Lottery::from_participants(participants)?;
    info!(participants = lottery.len(), ?winners, "drawing lottery");

    let draw = match winners {
        Some(count) => lottery.draw_winners(&mut session.sampler, count)?,
        None => lottery.generate(&mut session.sampler)?,
    };
    render(&draw, session.format)
}
