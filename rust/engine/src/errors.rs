use thiserror::Error;

use crate::cards::Card;

/// Errors an engine operation can report. All variants are recoverable
/// and leave the table state exactly as it was; the caller may retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid suit or rank: {0}")]
    InvalidCardSpec(String),
    #[error("Card {0} has already been used")]
    CardAlreadyUsed(Card),
    #[error("Card {0} is not in the deck")]
    CardNotInDeck(Card),
    #[error("No dealer card has been submitted yet")]
    NoDealerCard,
    #[error("No more cards left in the deck")]
    GameOver,
}
