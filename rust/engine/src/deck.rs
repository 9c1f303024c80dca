use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The set of undrawn cards. Starts as all 52 suit-rank combinations;
/// removal is the only mutation. Together with the used-card ledger it
/// partitions the initial 52-card set at all times.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// Restore the full 52-card set.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    /// Remove `card` from the deck. Removing a card that is not present
    /// is an error, not a no-op; callers must not silently re-draw.
    pub fn remove(&mut self, card: Card) -> Result<(), GameError> {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                Ok(())
            }
            None => Err(GameError::CardNotInDeck(card)),
        }
    }

    /// Read-only view of the undrawn cards.
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn new_deck_holds_all_52_cards() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 52);
        assert!(!deck.is_empty());
    }

    #[test]
    fn remove_takes_exactly_one_card() {
        let mut deck = Deck::new();
        let card = Card {
            suit: Suit::Spades,
            rank: Rank::Queen,
        };
        deck.remove(card).expect("remove");
        assert_eq!(deck.len(), 51);
        assert!(!deck.remaining().contains(&card));
    }

    #[test]
    fn removing_an_absent_card_is_an_error() {
        let mut deck = Deck::new();
        let card = Card {
            suit: Suit::Clubs,
            rank: Rank::Two,
        };
        deck.remove(card).expect("first remove");
        let err = deck.remove(card).expect_err("second remove");
        assert_eq!(err, GameError::CardNotInDeck(card));
        assert_eq!(deck.len(), 51);
    }

    #[test]
    fn reset_restores_the_full_set() {
        let mut deck = Deck::new();
        deck.remove(Card {
            suit: Suit::Hearts,
            rank: Rank::Seven,
        })
        .expect("remove");
        deck.reset();
        assert_eq!(deck.len(), 52);
    }
}
