//! Input parsing for the interactive table loop.
//!
//! Splits a raw input line into a table command; suit/rank tokens are
//! passed through verbatim and validated by the engine before any
//! state changes, so parsing here only decides which command was meant.

/// A command entered at the table prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum TableCommand {
    /// Submit or override the dealer's reference card
    Dealer { suit: String, rank: String },
    /// Submit the player's card, resolving the round
    Player { suit: String, rank: String },
    /// Show phase, dealer card, round number and cards remaining
    Status,
    /// List the cards used so far
    Used,
    /// Reset the table to a fresh deck
    Reset,
    /// Show the rules and command summary
    Help,
}

/// Result type for parsing user input at the table prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// A recognized table command
    Command(TableCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one input line into a [`TableCommand`] or special command.
///
/// Accepted forms (case-insensitive keywords):
/// - `dealer <suit> <rank>` / `player <suit> <rank>`
/// - `status`, `used`, `reset`, `help`
/// - `q` or `quit`
pub fn parse_table_command(input: &str) -> ParseResult {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    let keyword = parts[0].to_lowercase();
    if keyword == "q" || keyword == "quit" {
        return ParseResult::Quit;
    }

    match keyword.as_str() {
        "dealer" | "player" => {
            if parts.len() != 3 {
                return ParseResult::Invalid(format!(
                    "Invalid format. Enter `{keyword} <suit> <rank>` (e.g., `{keyword} spades Q`)."
                ));
            }
            let suit = parts[1].to_string();
            let rank = parts[2].to_string();
            if keyword == "dealer" {
                ParseResult::Command(TableCommand::Dealer { suit, rank })
            } else {
                ParseResult::Command(TableCommand::Player { suit, rank })
            }
        }
        "status" => ParseResult::Command(TableCommand::Status),
        "used" => ParseResult::Command(TableCommand::Used),
        "reset" => ParseResult::Command(TableCommand::Reset),
        "help" => ParseResult::Command(TableCommand::Help),
        other => ParseResult::Invalid(format!(
            "Unrecognized command: {other}. Enter `help` for the command list."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_card_submissions() {
        assert_eq!(
            parse_table_command("dealer spades Q"),
            ParseResult::Command(TableCommand::Dealer {
                suit: "spades".into(),
                rank: "Q".into()
            })
        );
        assert_eq!(
            parse_table_command("PLAYER hearts 7"),
            ParseResult::Command(TableCommand::Player {
                suit: "hearts".into(),
                rank: "7".into()
            })
        );
    }

    #[test]
    fn tokens_pass_through_unvalidated() {
        // Vocabulary checks belong to the engine.
        assert_eq!(
            parse_table_command("dealer swords 11"),
            ParseResult::Command(TableCommand::Dealer {
                suit: "swords".into(),
                rank: "11".into()
            })
        );
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(
            parse_table_command("status"),
            ParseResult::Command(TableCommand::Status)
        );
        assert_eq!(
            parse_table_command("used"),
            ParseResult::Command(TableCommand::Used)
        );
        assert_eq!(
            parse_table_command("reset"),
            ParseResult::Command(TableCommand::Reset)
        );
        assert_eq!(
            parse_table_command("help"),
            ParseResult::Command(TableCommand::Help)
        );
    }

    #[test]
    fn parses_quit() {
        assert_eq!(parse_table_command("q"), ParseResult::Quit);
        assert_eq!(parse_table_command("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            parse_table_command(""),
            ParseResult::Invalid(msg) if msg.contains("Empty")
        ));
        assert!(matches!(
            parse_table_command("dealer spades"),
            ParseResult::Invalid(msg) if msg.contains("Invalid format")
        ));
        assert!(matches!(
            parse_table_command("shuffle"),
            ParseResult::Invalid(msg) if msg.contains("Unrecognized")
        ));
    }
}
