use tracing::debug;

use crate::game::cards::{Card, HandError, Meld, MeldRules, MeldSize};

use super::greedy::IndexCombinations;
use super::types::{ExtractionPlan, MeldFinder};

struct Candidate {
    size: MeldSize,
    indices: Vec<usize>,
    meld: Meld,
}

#[derive(Debug, Clone, Copy)]
struct SlotBudget {
    three: usize,
    four: usize,
}

impl SlotBudget {
    fn from_plan(plan: &ExtractionPlan) -> Self {
        Self {
            three: plan.count(MeldSize::Three),
            four: plan.count(MeldSize::Four),
        }
    }

    fn remaining(&self, size: MeldSize) -> usize {
        match size {
            MeldSize::Three => self.three,
            MeldSize::Four => self.four,
        }
    }

    fn slot_mut(&mut self, size: MeldSize) -> &mut usize {
        match size {
            MeldSize::Three => &mut self.three,
            MeldSize::Four => &mut self.four,
        }
    }

    fn capacity(&self) -> usize {
        self.three * MeldSize::Three.card_count() + self.four * MeldSize::Four.card_count()
    }
}

struct Search {
    used: Vec<bool>,
    free: usize,
    budget: SlotBudget,
    chosen: Vec<usize>,
    best: Vec<usize>,
    best_cards: usize,
}

impl Search {
    fn run(&mut self, candidates: &[Candidate], start: usize, consumed: usize) {
        if consumed > self.best_cards {
            self.best_cards = consumed;
            self.best = self.chosen.clone();
        }
        if consumed + self.budget.capacity().min(self.free) <= self.best_cards {
            return;
        }

        for (offset, candidate) in candidates[start..].iter().enumerate() {
            let size = candidate.size;
            if self.budget.remaining(size) == 0
                || candidate.indices.iter().any(|&i| self.used[i])
            {
                continue;
            }

            for &i in &candidate.indices {
                self.used[i] = true;
            }
            self.free -= candidate.indices.len();
            *self.budget.slot_mut(size) -= 1;
            self.chosen.push(start + offset);

            self.run(candidates, start + offset + 1, consumed + candidate.indices.len());

            self.chosen.pop();
            *self.budget.slot_mut(size) += 1;
            self.free += candidate.indices.len();
            for &i in &candidate.indices {
                self.used[i] = false;
            }
        }
    }
}

/// Optimal-partition strategy: picks the disjoint melds, within the plan's
/// slot counts, that absorb the most cards.
///
/// Candidates are every valid meld of each planned size, listed size by size
/// in plan order and by hand index within a size. The search keeps the first
/// best collection it meets, so ties resolve the same way every time.
pub struct OptimalFinder;

impl OptimalFinder {
    pub fn new() -> Self {
        Self
    }

    fn candidates(hand: &[Card], plan: &ExtractionPlan, rules: &MeldRules) -> Vec<Candidate> {
        plan.sizes()
            .into_iter()
            .flat_map(|size| {
                IndexCombinations::new(hand.len(), size.card_count())
                    .map(move |indices| (size, indices))
            })
            .filter_map(|(size, indices)| {
                let cards: Vec<Card> = indices.iter().map(|&i| hand[i]).collect();
                Meld::with_rules(cards, rules).ok().map(|meld| Candidate {
                    size,
                    indices,
                    meld,
                })
            })
            .collect()
    }
}

impl Default for OptimalFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl MeldFinder for OptimalFinder {
    fn select_melds(
        &self,
        hand: &[Card],
        plan: &ExtractionPlan,
        rules: &MeldRules,
    ) -> Result<Vec<Meld>, HandError> {
        let candidates = Self::candidates(hand, plan, rules);

        let mut search = Search {
            used: vec![false; hand.len()],
            free: hand.len(),
            budget: SlotBudget::from_plan(plan),
            chosen: Vec::new(),
            best: Vec::new(),
            best_cards: 0,
        };
        search.run(&candidates, 0, 0);

        debug!(
            candidates = candidates.len(),
            cards_absorbed = search.best_cards,
            "Optimal meld search finished"
        );

        Ok(search
            .best
            .iter()
            .map(|&idx| candidates[idx].meld.clone())
            .collect())
    }

    fn strategy_name(&self) -> &'static str {
        "OptimalFinder"
    }
}
