use tracing::trace;

use crate::game::cards::{remove_meld, Card, HandError, Meld, MeldRules, MeldSize};

use super::types::{ExtractionPlan, MeldFinder};

/// Index tuples `i < j < ...` over `0..n`, in lexicographic order.
pub(crate) struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl IndexCombinations {
    pub(crate) fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Bump the rightmost index that still has room, reset everything after it
        let k = self.indices.len();
        let mut pos = k;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.indices[pos] < self.n - k + pos {
                self.indices[pos] += 1;
                for next in pos + 1..k {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// First meld of `size` cards in hand-index order, cards kept in index order.
pub fn find_meld(hand: &[Card], size: MeldSize, rules: &MeldRules) -> Option<Meld> {
    IndexCombinations::new(hand.len(), size.card_count()).find_map(|indices| {
        let cards: Vec<Card> = indices.iter().map(|&i| hand[i]).collect();
        Meld::with_rules(cards, rules).ok()
    })
}

/// First `(i, j, k)` triple, with `i < j < k`, whose cards form a meld.
pub fn find_three_meld(hand: &[Card], rules: &MeldRules) -> Option<Meld> {
    find_meld(hand, MeldSize::Three, rules)
}

/// First `(i, j, k, l)` quadruple, with `i < j < k < l`, whose cards form a meld.
pub fn find_four_meld(hand: &[Card], rules: &MeldRules) -> Option<Meld> {
    find_meld(hand, MeldSize::Four, rules)
}

/// Greedy-first-index strategy: fills each slot of the plan in turn with the
/// first meld found in what is left of the hand.
///
/// This is the reference behavior. It does not look ahead, so an early
/// 3-card meld can break up a 4-card meld that would have used more cards.
pub struct GreedyFinder;

impl GreedyFinder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl MeldFinder for GreedyFinder {
    fn select_melds(
        &self,
        hand: &[Card],
        plan: &ExtractionPlan,
        rules: &MeldRules,
    ) -> Result<Vec<Meld>, HandError> {
        let mut working = hand.to_vec();
        let mut melds = Vec::new();

        for slot in plan.slots() {
            match find_meld(&working, *slot, rules) {
                Some(meld) => {
                    remove_meld(meld.cards(), &mut working)?;
                    melds.push(meld);
                }
                None => {
                    trace!(slot = slot.card_count(), remaining = working.len(), "No meld for slot");
                }
            }
        }

        Ok(melds)
    }

    fn strategy_name(&self) -> &'static str {
        "GreedyFinder"
    }
}
