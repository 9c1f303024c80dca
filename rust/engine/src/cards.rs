use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits identify a card but carry no ordering; a round's outcome
/// never depends on suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Carries the single fixed total order (2 < 3 < ... < K < A) used by both
/// round comparison and the probability engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

/// Represents a single playing card with a suit and rank.
/// Cards are the fundamental unit of the game: the dealer's reference
/// card and the player's submitted card each round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    /// Decode a card from raw suit and rank tokens as split out of a
    /// command line, e.g. `("spades", "Q")`. Tokens are matched
    /// case-insensitively; anything outside the fixed vocabularies is
    /// rejected with [`GameError::InvalidCardSpec`] before any state
    /// is touched.
    pub fn from_tokens(suit: &str, rank: &str) -> Result<Card, GameError> {
        let suit = suit.parse::<Suit>()?;
        let rank = rank.parse::<Rank>()?;
        Ok(Card { suit, rank })
    }
}

impl FromStr for Suit {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spades" => Ok(Suit::Spades),
            "hearts" => Ok(Suit::Hearts),
            "diamonds" => Ok(Suit::Diamonds),
            "clubs" => Ok(Suit::Clubs),
            _ => Err(GameError::InvalidCardSpec(s.to_string())),
        }
    }
}

impl FromStr for Rank {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(GameError::InvalidCardSpec(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            r => return write!(f, "{}", *r as u8),
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Card {
    /// Compact form used in error and log text, e.g. `Qs`, `10h`.
    /// Presentation-quality rendering (suit symbols) belongs to the
    /// display layer, not the engine.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_has_52_distinct_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        let unique: std::collections::HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn rank_order_is_two_through_ace() {
        let ranks = all_ranks();
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::King < Rank::Ace);
    }

    #[test]
    fn tokens_parse_case_insensitively() {
        let c = Card::from_tokens("Spades", "q").expect("parse");
        assert_eq!(c.suit, Suit::Spades);
        assert_eq!(c.rank, Rank::Queen);

        let c = Card::from_tokens("HEARTS", "10").expect("parse");
        assert_eq!(c.suit, Suit::Hearts);
        assert_eq!(c.rank, Rank::Ten);
    }

    #[test]
    fn invalid_tokens_are_rejected() {
        assert!(matches!(
            Card::from_tokens("swords", "Q"),
            Err(GameError::InvalidCardSpec(t)) if t == "swords"
        ));
        assert!(matches!(
            Card::from_tokens("spades", "11"),
            Err(GameError::InvalidCardSpec(t)) if t == "11"
        ));
        assert!(matches!(
            Card::from_tokens("spades", ""),
            Err(GameError::InvalidCardSpec(_))
        ));
    }

    #[test]
    fn card_display_is_compact() {
        let c = Card {
            suit: Suit::Spades,
            rank: Rank::Queen,
        };
        assert_eq!(c.to_string(), "Qs");
        let c = Card {
            suit: Suit::Hearts,
            rank: Rank::Ten,
        };
        assert_eq!(c.to_string(), "10h");
    }

    #[test]
    fn card_serializes_with_lowercase_suit() {
        let c = Card {
            suit: Suit::Diamonds,
            rank: Rank::Ace,
        };
        let json = serde_json::to_value(c).expect("serialize");
        assert_eq!(json["suit"], "diamonds");
        assert_eq!(json["rank"], "Ace");
    }
}
