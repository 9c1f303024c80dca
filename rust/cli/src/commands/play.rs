//! # Play Command
//!
//! Interactive high-card table session.
//!
//! Reads table commands from stdin (`dealer <suit> <rank>`,
//! `player <suit> <rank>`, `status`, `used`, `reset`, `help`, `q`) and
//! renders probabilities, round outcomes and the used-card list. Every
//! engine error is reported and leaves the table unchanged, so the user
//! can simply retry.

use std::io::{BufRead, Write};

use highcard_engine::round::{Outcome, Phase};
use highcard_engine::session::SessionRegistry;

use crate::error::CliError;
use crate::formatters::{format_card, format_odds, format_used_cards, suit_legend};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, TableCommand, parse_table_command};

/// Handle the play command: one interactive table session.
///
/// # Arguments
///
/// * `session` - Session name (isolated deck/ledger per name)
/// * `unicode` - Whether to render Unicode suit symbols
/// * `out` - Output stream for table display
/// * `err` - Error stream for rejected submissions
/// * `stdin` - Input stream for table commands
pub fn handle_play_command(
    session: &str,
    unicode: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let registry = SessionRegistry::new();
    registry.start(session)?;

    writeln!(out, "Game started! Enter `dealer <suit> <rank>` to begin.")?;
    writeln!(out, "{}", suit_legend(unicode))?;
    writeln!(out, "Enter `help` for the rules, `q` to leave the table.")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            break;
        };

        match parse_table_command(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Command(cmd) => {
                execute_command(&registry, session, cmd, unicode, out, err)?;
            }
        }
    }

    writeln!(out, "Table closed.")?;
    Ok(())
}

fn execute_command(
    registry: &SessionRegistry,
    session: &str,
    cmd: TableCommand,
    unicode: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        TableCommand::Dealer { suit, rank } => {
            match registry.submit_dealer_card(session, &suit, &rank) {
                Ok(report) => {
                    writeln!(out, "Based on dealer's card: {}", format_odds(report.odds))?;
                    writeln!(out, "Cards that have been used so far:")?;
                    writeln!(out, "{}", format_used_cards(&report.used_cards, unicode))?;
                    if registry.status(session)?.phase == Phase::GameOver {
                        writeln!(out, "No more cards left in the deck!")?;
                    } else {
                        writeln!(out, "Enter `player <suit> <rank>` to continue.")?;
                    }
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            }
        }
        TableCommand::Player { suit, rank } => {
            match registry.submit_player_card(session, &suit, &rank) {
                Ok(report) => {
                    let status = registry.status(session)?;
                    match report.outcome {
                        Outcome::DealerWins => writeln!(out, "Dealer wins this round!")?,
                        Outcome::PlayerWins => writeln!(out, "Player wins this round!")?,
                        Outcome::Tie => {
                            // The carried-over dealer card is the card just played.
                            if let Some(card) = status.dealer_card {
                                writeln!(
                                    out,
                                    "It's a tie! Both Dealer and Player drew {}.",
                                    card.rank
                                )?;
                            }
                        }
                    }
                    writeln!(out, "Updated probabilities: {}", format_odds(report.odds))?;
                    writeln!(out, "Cards that have been used so far:")?;
                    writeln!(out, "{}", format_used_cards(&report.used_cards, unicode))?;
                    if status.phase == Phase::GameOver {
                        writeln!(out, "No more cards left in the deck!")?;
                    } else {
                        writeln!(
                            out,
                            "Round {}: enter `player <suit> <rank>` to play against the \
                             carried-over card, or `dealer <suit> <rank>` to override it.",
                            status.round_number
                        )?;
                    }
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            }
        }
        TableCommand::Status => {
            let status = registry.status(session)?;
            let phase = match status.phase {
                Phase::AwaitingDealerCard => "awaiting dealer card",
                Phase::AwaitingPlayerCard => "awaiting player card",
                Phase::GameOver => "game over",
            };
            let dealer = match status.dealer_card {
                Some(card) => format_card(card, unicode),
                None => "none".to_string(),
            };
            writeln!(
                out,
                "Round {} | {} | Dealer card: {} | Cards remaining: {}",
                status.round_number, phase, dealer, status.remaining
            )?;
        }
        TableCommand::Used => {
            let used = registry.used_cards(session)?;
            if used.is_empty() {
                writeln!(out, "No cards have been used yet.")?;
            } else {
                writeln!(out, "Cards that have been used so far:")?;
                writeln!(out, "{}", format_used_cards(&used, unicode))?;
            }
        }
        TableCommand::Reset => {
            registry.reset(session)?;
            writeln!(out, "Game has been reset! Enter `dealer <suit> <rank>` to begin.")?;
        }
        TableCommand::Help => {
            crate::commands::handle_rules_command(unicode, out)?;
        }
    }
    Ok(())
}
