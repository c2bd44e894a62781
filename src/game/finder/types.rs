use strum_macros::{Display, EnumString};

use crate::game::cards::{Card, HandError, Meld, MeldRules, MeldSize};

/// Which meld finder a reducer uses.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyKind {
    /// First match in hand order, one slot at a time
    #[default]
    Greedy,
    /// Most cards consumed across all slots
    Optimal,
}

/// The ordered meld slots a reduction pass tries to fill.
///
/// A 10 or 11 card hand holds at most one 3-card meld next to two 4-card
/// melds, hence the default of `[Three, Four, Four]`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ExtractionPlan {
    slots: Vec<MeldSize>,
}

impl ExtractionPlan {
    pub fn new(slots: Vec<MeldSize>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[MeldSize] {
        &self.slots
    }

    /// Number of slots for melds of `size`.
    pub fn count(&self, size: MeldSize) -> usize {
        self.slots.iter().filter(|slot| **slot == size).count()
    }

    /// Distinct slot sizes in order of first appearance.
    pub fn sizes(&self) -> Vec<MeldSize> {
        let mut sizes = Vec::new();
        for slot in &self.slots {
            if !sizes.contains(slot) {
                sizes.push(*slot);
            }
        }
        sizes
    }

    /// Cards needed before any slot could be filled.
    pub fn smallest_meld(&self) -> Option<usize> {
        self.slots.iter().map(|slot| slot.card_count()).min()
    }
}

impl Default for ExtractionPlan {
    fn default() -> Self {
        Self::new(vec![MeldSize::Three, MeldSize::Four, MeldSize::Four])
    }
}

/// Trait for meld selection strategies
pub trait MeldFinder: Send + Sync {
    /// Choose the melds to pull out of `hand`, in extraction order.
    ///
    /// The returned melds never share a card position of `hand`, so they can be
    /// removed one after another.
    fn select_melds(
        &self,
        hand: &[Card],
        plan: &ExtractionPlan,
        rules: &MeldRules,
    ) -> Result<Vec<Meld>, HandError>;

    /// Get the name of this strategy
    fn strategy_name(&self) -> &'static str;
}
