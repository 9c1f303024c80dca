use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use thiserror::Error;

use crate::cards::Card;
use crate::errors::GameError;
use crate::round::{DealReport, RoundEngine, RoundReport, TableStatus};

/// Opaque session identifier supplied by the hosting dispatcher
/// (a user id, a channel id, a terminal name).
pub type SessionId = String;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Session storage poisoned")]
    StoragePoisoned,
}

/// Registry of independent table sessions, one per external actor.
///
/// Each session exclusively owns its deck, ledger and round state;
/// nothing is shared across sessions. Within a session, submissions are
/// serialized through the session's mutex so that racing commands from
/// the same actor cannot break the deck/ledger partition. There is no
/// durability: the registry lives and dies with the process.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<RoundEngine>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the session for `id` if it does not exist, then reset it
    /// to a fresh table. Starting is always idempotent.
    pub fn start(&self, id: &str) -> Result<TableStatus, SessionError> {
        let session = {
            let mut guard = self
                .sessions
                .write()
                .map_err(|_| SessionError::StoragePoisoned)?;
            Arc::clone(guard.entry(id.to_string()).or_insert_with(|| {
                tracing::info!(session_id = %id, "creating new table session");
                Arc::new(Mutex::new(RoundEngine::new()))
            }))
        };
        let mut engine = session.lock().map_err(|_| SessionError::StoragePoisoned)?;
        engine.reset();
        Ok(engine.status())
    }

    /// Reset an existing session to a fresh table.
    pub fn reset(&self, id: &str) -> Result<TableStatus, SessionError> {
        let session = self.get(id)?;
        let mut engine = session.lock().map_err(|_| SessionError::StoragePoisoned)?;
        engine.reset();
        tracing::info!(session_id = %id, "table session reset");
        Ok(engine.status())
    }

    /// Decode the suit/rank tokens and submit the dealer's card.
    /// Token validation happens before the session is even looked up,
    /// so malformed tokens can never touch table state.
    pub fn submit_dealer_card(
        &self,
        id: &str,
        suit: &str,
        rank: &str,
    ) -> Result<DealReport, SessionError> {
        let card = Card::from_tokens(suit, rank)?;
        let session = self.get(id)?;
        let mut engine = session.lock().map_err(|_| SessionError::StoragePoisoned)?;
        let report = engine.submit_dealer_card(card)?;
        tracing::debug!(session_id = %id, card = %card, "dealer card accepted");
        Ok(report)
    }

    /// Decode the suit/rank tokens and submit the player's card,
    /// resolving the round against the current dealer card.
    pub fn submit_player_card(
        &self,
        id: &str,
        suit: &str,
        rank: &str,
    ) -> Result<RoundReport, SessionError> {
        let card = Card::from_tokens(suit, rank)?;
        let session = self.get(id)?;
        let mut engine = session.lock().map_err(|_| SessionError::StoragePoisoned)?;
        let report = engine.submit_player_card(card)?;
        tracing::debug!(
            session_id = %id,
            card = %card,
            outcome = ?report.outcome,
            "round resolved"
        );
        Ok(report)
    }

    pub fn status(&self, id: &str) -> Result<TableStatus, SessionError> {
        let session = self.get(id)?;
        let engine = session.lock().map_err(|_| SessionError::StoragePoisoned)?;
        Ok(engine.status())
    }

    /// The session's used cards in first-occurrence order, for display.
    pub fn used_cards(&self, id: &str) -> Result<Vec<Card>, SessionError> {
        let session = self.get(id)?;
        let engine = session.lock().map_err(|_| SessionError::StoragePoisoned)?;
        Ok(engine.ledger().ordered_unique())
    }

    /// Drop a session entirely. Unknown ids are an error so callers can
    /// tell eviction from a typo.
    pub fn remove(&self, id: &str) -> Result<(), SessionError> {
        let removed = self
            .sessions
            .write()
            .map_err(|_| SessionError::StoragePoisoned)?
            .remove(id);
        match removed {
            Some(_) => {
                tracing::info!(session_id = %id, "table session removed");
                Ok(())
            }
            None => Err(SessionError::NotFound(id.to_string())),
        }
    }

    pub fn active_sessions(&self) -> Vec<SessionId> {
        match self.sessions.read() {
            Ok(guard) => guard.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn get(&self, id: &str) -> Result<Arc<Mutex<RoundEngine>>, SessionError> {
        let guard = self
            .sessions
            .read()
            .map_err(|_| SessionError::StoragePoisoned)?;
        guard
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{Outcome, Phase};
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn start_creates_and_status_projects() {
        let registry = SessionRegistry::new();
        let status = registry.start("alice").expect("start");
        assert_eq!(status.phase, Phase::AwaitingDealerCard);
        assert_eq!(status.remaining, 52);

        let status = registry.status("alice").expect("status");
        assert_eq!(status.round_number, 1);
        assert_eq!(status.dealer_card, None);
    }

    #[test]
    fn unknown_session_is_reported() {
        let registry = SessionRegistry::new();
        assert!(matches!(
            registry.status("nobody"),
            Err(SessionError::NotFound(id)) if id == "nobody"
        ));
        assert!(matches!(
            registry.submit_dealer_card("nobody", "spades", "Q"),
            Err(SessionError::NotFound(_))
        ));
        assert!(matches!(
            registry.remove("nobody"),
            Err(SessionError::NotFound(_))
        ));
    }

    #[test]
    fn sessions_do_not_share_state() {
        let registry = SessionRegistry::new();
        registry.start("alice").expect("start");
        registry.start("bob").expect("start");

        registry
            .submit_dealer_card("alice", "spades", "Q")
            .expect("alice dealer");

        // Bob's deck is untouched and the same card is still available.
        assert_eq!(registry.status("bob").expect("status").remaining, 52);
        registry
            .submit_dealer_card("bob", "spades", "Q")
            .expect("bob dealer");
        assert_eq!(registry.status("alice").expect("status").remaining, 51);
        assert_eq!(registry.status("bob").expect("status").remaining, 51);
    }

    #[test]
    fn tokens_are_validated_before_state_changes() {
        let registry = SessionRegistry::new();
        registry.start("alice").expect("start");
        let err = registry
            .submit_dealer_card("alice", "swords", "Q")
            .expect_err("bad suit");
        assert!(matches!(
            err,
            SessionError::Game(GameError::InvalidCardSpec(_))
        ));
        assert_eq!(registry.status("alice").expect("status").remaining, 52);
    }

    #[test]
    fn full_exchange_through_the_registry() {
        let registry = SessionRegistry::new();
        registry.start("table-1").expect("start");

        let deal = registry
            .submit_dealer_card("table-1", "spades", "Q")
            .expect("dealer");
        assert_eq!(deal.odds.lower, 40.0 / 51.0);
        assert_eq!(deal.odds.higher, 8.0 / 51.0);

        let round = registry
            .submit_player_card("table-1", "hearts", "7")
            .expect("player");
        assert_eq!(round.outcome, Outcome::DealerWins);
        assert_eq!(round.used_cards.len(), 2);

        let status = registry.status("table-1").expect("status");
        assert_eq!(status.round_number, 2);
        assert_eq!(status.remaining, 50);

        registry.reset("table-1").expect("reset");
        assert_eq!(registry.status("table-1").expect("status").remaining, 52);
    }

    #[test]
    fn start_is_idempotent_and_resets() {
        let registry = SessionRegistry::new();
        registry.start("alice").expect("start");
        registry
            .submit_dealer_card("alice", "clubs", "2")
            .expect("dealer");
        let status = registry.start("alice").expect("restart");
        assert_eq!(status.remaining, 52);
        assert_eq!(status.phase, Phase::AwaitingDealerCard);
    }

    #[test]
    fn concurrent_session_creation_is_safe() {
        let registry = Arc::new(SessionRegistry::new());

        let mut handles = Vec::new();
        for t in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                let mut ids = Vec::new();
                for i in 0..32 {
                    let id = format!("actor-{t}-{i}");
                    registry.start(&id).expect("start");
                    ids.push(id);
                }
                ids
            }));
        }

        let mut unique = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("join thread") {
                assert!(unique.insert(id));
            }
        }
        assert_eq!(registry.active_sessions().len(), unique.len());
    }

    #[test]
    fn racing_submissions_against_one_session_stay_consistent() {
        let registry = Arc::new(SessionRegistry::new());
        registry.start("shared").expect("start");
        registry
            .submit_dealer_card("shared", "spades", "A")
            .expect("dealer");

        // Two threads race to play the same card; exactly one wins.
        let mut handles = Vec::new();
        for _ in 0..2 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                registry.submit_player_card("shared", "hearts", "7").is_ok()
            }));
        }
        let successes = handles
            .into_iter()
            .map(|h| h.join().expect("join"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(registry.status("shared").expect("status").remaining, 50);
    }
}
