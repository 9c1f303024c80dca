use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;

/// Empirical odds that the next card drawn from the deck ranks below or
/// above a reference card. Cards of equal rank count toward neither
/// side but stay in the denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankOdds {
    pub lower: f64,
    pub higher: f64,
}

/// Compute rank-relative odds over the current deck. Pure and
/// deterministic: identical deck contents always produce bit-identical
/// results. An empty deck yields zero odds on both sides rather than an
/// error, so exhausted-deck displays stay well defined.
pub fn compute_odds(deck: &Deck, reference: Card) -> RankOdds {
    let total = deck.len();
    if total == 0 {
        return RankOdds {
            lower: 0.0,
            higher: 0.0,
        };
    }
    let lower = deck
        .remaining()
        .iter()
        .filter(|c| c.rank < reference.rank)
        .count();
    let higher = deck
        .remaining()
        .iter()
        .filter(|c| c.rank > reference.rank)
        .count();
    RankOdds {
        lower: lower as f64 / total as f64,
        higher: higher as f64 / total as f64,
    }
}
