//! Dice command.

use rundomizer_core::generators::{DiceRoll, Generator};
use tracing::debug;

use crate::output::{render, OutputFormat};
use crate::session::Session;
use crate::Result;

/// Run the dice command; text output prepends the die faces.
pub fn run(session: &mut Session, count: usize) -> Result<String> {
    let roll = DiceRoll::new(count).generate(&mut session.sampler)?;
    debug!(dice = ?roll.dice, total = roll.total, "dice rolled");
    match session.format {
        OutputFormat::Text => Ok(format!("{}\n{}", roll.faces(), render(&roll, session.format)?)),
        OutputFormat::Json => render(&roll, session.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;

    #[test]
    fn test_dice_json_total() {
        let mut session = testing::session(OutputFormat::Json);
        let output = run(&mut session, 4).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let dice: Vec<u64> = json["dice"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d.as_u64().unwrap())
            .collect();
        assert_eq!(dice.len(), 4);
        assert_eq!(json["total"].as_u64().unwrap(), dice.iter().sum::<u64>());
    }

    #[test]
    fn test_dice_text_has_faces() {
        let mut session = testing::session(OutputFormat::Text);
        let output = run(&mut session, 2).unwrap();
        let (faces, summary) = output.split_once('\n').unwrap();
        assert_eq!(faces.chars().count(), 2);
        assert!(summary.starts_with("Бросок кости: "));
    }

    #[test]
    fn test_dice_cap() {
        let mut session = testing::session(OutputFormat::Text);
        assert!(run(&mut session, 0).is_err());
        assert!(run(&mut session, 7).is_err());
    }
}
