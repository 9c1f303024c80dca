//! Card, odds, and used-list formatters for terminal display.
//!
//! Pure functions turning the engine's structured values into text.
//! The engine itself never returns pre-formatted strings; all
//! presentation decisions (suit symbols, percentage rounding) live
//! here. Unicode suit symbols are used where the terminal supports
//! them, with single-letter ASCII fallback.

use highcard_engine::cards::{Card, Suit};
use highcard_engine::probability::RankOdds;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern
/// terminals (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On
/// Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a suit as a symbol (♠ ♥ ♦ ♣) or an ASCII letter (s h d c).
pub fn format_suit(suit: Suit, unicode: bool) -> &'static str {
    if unicode {
        match suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        }
    }
}

/// Format a card as rank followed by suit symbol, e.g. `Q ♠` or `Q s`.
pub fn format_card(card: Card, unicode: bool) -> String {
    format!("{} {}", card.rank, format_suit(card.suit, unicode))
}

/// Format odds as two percentages with two decimal places,
/// e.g. `Lower: 78.43%, Higher: 15.69%`.
pub fn format_odds(odds: RankOdds) -> String {
    format!(
        "Lower: {:.2}%, Higher: {:.2}%",
        odds.lower * 100.0,
        odds.higher * 100.0
    )
}

/// Format the used-card list, one card per line in draw order.
pub fn format_used_cards(cards: &[Card], unicode: bool) -> String {
    cards
        .iter()
        .map(|c| format_card(*c, unicode))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The suit vocabulary legend shown at game start and in the rules.
pub fn suit_legend(unicode: bool) -> String {
    format!(
        "Suits: spades {}, hearts {}, diamonds {}, clubs {}",
        format_suit(Suit::Spades, unicode),
        format_suit(Suit::Hearts, unicode),
        format_suit(Suit::Diamonds, unicode),
        format_suit(Suit::Clubs, unicode),
    )
}
