//! # highcard-engine: High-Card Wagering Engine Core
//!
//! A turn-based high-card engine that tracks a depleting standard deck,
//! computes live win/lose probabilities against the dealer's reference
//! card, and advances rounds with a carry-over rule (the player's card
//! always becomes the next round's dealer card).
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), the fixed rank
//!   order, and token parsing
//! - [`deck`] - The set of undrawn cards; removal is the only mutation
//! - [`ledger`] - Append-only record of drawn cards in draw order
//! - [`probability`] - Rank-relative odds over the current deck
//! - [`round`] - Dealer/player turn state machine with carry-over
//! - [`session`] - Per-actor session registry with single-writer locking
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use highcard_engine::cards::Card;
//! use highcard_engine::round::{Outcome, RoundEngine};
//!
//! let mut table = RoundEngine::new();
//!
//! let deal = table
//!     .submit_dealer_card(Card::from_tokens("spades", "Q").unwrap())
//!     .unwrap();
//! assert_eq!(deal.odds.lower, 40.0 / 51.0);
//!
//! let round = table
//!     .submit_player_card(Card::from_tokens("hearts", "7").unwrap())
//!     .unwrap();
//! assert_eq!(round.outcome, Outcome::DealerWins);
//! // The seven carries over as the next dealer card.
//! assert_eq!(table.status().round_number, 2);
//! ```
//!
//! ## Sessions
//!
//! A hosting dispatcher serving many actors keys one isolated table per
//! actor through [`session::SessionRegistry`]:
//!
//! ```rust
//! use highcard_engine::session::SessionRegistry;
//!
//! let registry = SessionRegistry::new();
//! registry.start("alice").unwrap();
//! let deal = registry.submit_dealer_card("alice", "spades", "Q").unwrap();
//! assert_eq!(deal.used_cards.len(), 1);
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns a `Result`; errors are values, never panics,
//! and a returned error guarantees the table state did not change.

pub mod cards;
pub mod deck;
pub mod errors;
pub mod ledger;
pub mod probability;
pub mod round;
pub mod session;
