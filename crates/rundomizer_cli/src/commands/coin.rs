//! Coin command.

use rundomizer_core::generators::{CoinFlip, Generator};

use crate::output::render;
use crate::session::Session;
use crate::Result;

/// Run the coin command
pub fn run(session: &mut Session) -> Result<String> {
    let toss = CoinFlip.generate(&mut session.sampler)?;
    render(&toss, session.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::output::OutputFormat;

    #[test]
    fn test_coin_sides() {
        let mut session = testing::session(OutputFormat::Text);
        for _ in 0..20 {
            let output = run(&mut session).unwrap();
            assert!(
                output == "Результат броска монеты: Орёл"
                    || output == "Результат броска монеты: Решка",
                "unexpected output: {}",
                output
            );
        }
    }
}
