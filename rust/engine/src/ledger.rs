use std::collections::HashSet;

use crate::cards::Card;

/// Append-only record of drawn cards in draw order. The ledger is pure
/// storage: it never rejects a duplicate itself. Duplicate-play
/// rejection happens at the round-engine boundary via [`contains`],
/// backed by a companion lookup set for O(1) checks.
///
/// [`contains`]: UsedCardLedger::contains
#[derive(Debug, Clone, Default)]
pub struct UsedCardLedger {
    order: Vec<Card>,
    seen: HashSet<Card>,
}

impl UsedCardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unconditionally. Callers wanting duplicate detection must
    /// check [`contains`](UsedCardLedger::contains) first.
    pub fn record(&mut self, card: Card) {
        self.order.push(card);
        self.seen.insert(card);
    }

    pub fn contains(&self, card: Card) -> bool {
        self.seen.contains(&card)
    }

    /// The recorded cards in first-occurrence order with duplicates
    /// collapsed. A no-op view on a ledger that never received true
    /// duplicates, kept for display since the ledger does not itself
    /// reject them.
    pub fn ordered_unique(&self) -> Vec<Card> {
        let mut emitted = HashSet::new();
        self.order
            .iter()
            .filter(|c| emitted.insert(**c))
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.order.iter()
    }
}
