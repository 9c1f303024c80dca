use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::ledger::UsedCardLedger;
use crate::probability::{compute_odds, RankOdds};

/// Where the table currently is in the dealer/player turn sequence.
///
/// After a resolved round the table returns to `AwaitingDealerCard`
/// with the player's card already carried over as the next dealer card;
/// the caller may submit the next player card straight away or override
/// the carried card with an explicit dealer submission.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingDealerCard,
    AwaitingPlayerCard,
    /// Terminal: all 52 cards drawn. Only `reset` leaves this state.
    GameOver,
}

/// Outcome of a resolved round, decided purely by rank order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    DealerWins,
    PlayerWins,
    Tie,
}

/// Result of a dealer-card submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealReport {
    pub odds: RankOdds,
    pub used_cards: Vec<Card>,
}

/// Result of a player-card submission: the round's outcome plus odds
/// recomputed against the carried-over dealer card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport {
    pub outcome: Outcome,
    pub odds: RankOdds,
    pub used_cards: Vec<Card>,
}

/// Read-only projection of the table for prompt rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableStatus {
    pub phase: Phase,
    pub dealer_card: Option<Card>,
    pub round_number: u32,
    pub remaining: usize,
}

/// State machine driving dealer/player turns over one deck.
///
/// Owns the deck and the used-card ledger and keeps them a strict
/// partition of the initial 52-card set: every card is in exactly one
/// of the two at all times. Every operation validates before it
/// mutates, so a returned error means nothing changed.
#[derive(Debug)]
pub struct RoundEngine {
    deck: Deck,
    ledger: UsedCardLedger,
    phase: Phase,
    dealer_card: Option<Card>,
    round_number: u32,
}

impl RoundEngine {
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            ledger: UsedCardLedger::new(),
            phase: Phase::AwaitingDealerCard,
            dealer_card: None,
            round_number: 1,
        }
    }

    /// Back to a fresh table: full deck, empty ledger, round 1.
    pub fn reset(&mut self) {
        self.deck.reset();
        self.ledger.clear();
        self.phase = Phase::AwaitingDealerCard;
        self.dealer_card = None;
        self.round_number = 1;
    }

    /// Take `card` out of the deck and onto the ledger. All validation
    /// happens before the first mutation.
    fn draw(&mut self, card: Card) -> Result<(), GameError> {
        if self.phase == Phase::GameOver {
            return Err(GameError::GameOver);
        }
        if self.ledger.contains(card) {
            return Err(GameError::CardAlreadyUsed(card));
        }
        // Unreachable given the ledger check; kept as the invariant guard.
        self.deck.remove(card)?;
        self.ledger.record(card);
        Ok(())
    }

    /// Submit the dealer's reference card. Legal in any non-terminal
    /// phase: before the player resolves the round, an explicit dealer
    /// submission overrides a carried-over (or previously submitted)
    /// dealer card.
    pub fn submit_dealer_card(&mut self, card: Card) -> Result<DealReport, GameError> {
        self.draw(card)?;
        self.dealer_card = Some(card);
        let odds = compute_odds(&self.deck, card);
        self.phase = if self.deck.is_empty() {
            Phase::GameOver
        } else {
            Phase::AwaitingPlayerCard
        };
        Ok(DealReport {
            odds,
            used_cards: self.ledger.ordered_unique(),
        })
    }

    /// Submit the player's card against the current dealer card,
    /// resolving the round. The player's card always becomes the next
    /// round's dealer card (carry-over), and odds are recomputed
    /// against it.
    pub fn submit_player_card(&mut self, card: Card) -> Result<RoundReport, GameError> {
        if self.phase == Phase::GameOver {
            return Err(GameError::GameOver);
        }
        let dealer = self.dealer_card.ok_or(GameError::NoDealerCard)?;
        self.draw(card)?;

        let outcome = match card.rank.cmp(&dealer.rank) {
            Ordering::Less => Outcome::DealerWins,
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Equal => Outcome::Tie,
        };

        self.dealer_card = Some(card);
        let odds = compute_odds(&self.deck, card);
        self.round_number += 1;
        self.phase = if self.deck.is_empty() {
            Phase::GameOver
        } else {
            Phase::AwaitingDealerCard
        };

        Ok(RoundReport {
            outcome,
            odds,
            used_cards: self.ledger.ordered_unique(),
        })
    }

    pub fn status(&self) -> TableStatus {
        TableStatus {
            phase: self.phase,
            dealer_card: self.dealer_card,
            round_number: self.round_number,
            remaining: self.deck.len(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn ledger(&self) -> &UsedCardLedger {
        &self.ledger
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}
