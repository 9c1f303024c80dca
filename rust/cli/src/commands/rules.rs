//! # Rules Command
//!
//! Prints the game rules and the suit vocabulary legend.

use std::io::Write;

use crate::error::CliError;
use crate::formatters::suit_legend;

pub fn handle_rules_command(unicode: bool, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "High-card rules")?;
    writeln!(out)?;
    writeln!(
        out,
        "Each round the player's card is compared to the dealer's card by rank"
    )?;
    writeln!(
        out,
        "(2 < 3 < ... < 10 < J < Q < K < A; suits never matter). Higher rank"
    )?;
    writeln!(
        out,
        "wins, equal rank is a tie. The player's card then becomes the next"
    )?;
    writeln!(
        out,
        "round's dealer card, and the odds of the next card ranking lower or"
    )?;
    writeln!(
        out,
        "higher are computed over the cards still in the deck. The game ends"
    )?;
    writeln!(out, "when all 52 cards have been played.")?;
    writeln!(out)?;
    writeln!(out, "{}", suit_legend(unicode))?;
    writeln!(out, "Ranks: 2-10, J, Q, K, A")?;
    writeln!(out)?;
    writeln!(out, "Table commands:")?;
    writeln!(out, "  dealer <suit> <rank>   submit or override the dealer card")?;
    writeln!(out, "  player <suit> <rank>   play your card against the dealer")?;
    writeln!(out, "  status                 show round, phase and cards remaining")?;
    writeln!(out, "  used                   list the cards played so far")?;
    writeln!(out, "  reset                  start over with a fresh deck")?;
    writeln!(out, "  help                   show this text")?;
    writeln!(out, "  q                      leave the table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_mention_rank_order_and_commands() {
        let mut out: Vec<u8> = Vec::new();
        handle_rules_command(false, &mut out).expect("rules");
        let s = String::from_utf8_lossy(&out);
        assert!(s.contains("2 < 3 < ... < 10 < J < Q < K < A"));
        assert!(s.contains("dealer <suit> <rank>"));
        assert!(s.contains("player <suit> <rank>"));
        assert!(s.contains("Suits: spades s, hearts h, diamonds d, clubs c"));
    }
}
