//! Hand construction helpers shared by the integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use ginrummy::game::{Card, Rank, Suit};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(::ginrummy::game::Card::new(
            ::ginrummy::game::Rank::$rank,
            ::ginrummy::game::Suit::$suit,
        )),*]
    };
}

/// Build a hand from `(suit, rank)` wire ordinals
pub fn hand_from_ordinals(pairs: &[(u8, u8)]) -> Vec<Card> {
    pairs
        .iter()
        .map(|&(suit, rank)| Card::from_ordinals(suit, rank).expect("valid card ordinals"))
        .collect()
}

// ============================================================================
// Hand Builder
// ============================================================================

pub struct HandBuilder {
    cards: Vec<Card>,
}

impl HandBuilder {
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    /// The ten-card hand with a duplicated ten of hearts
    pub fn with_scenario_hand(self) -> Self {
        self.with_cards(hand_from_ordinals(&[
            (1, 10),
            (3, 10),
            (0, 10),
            (1, 10),
            (1, 9),
            (1, 8),
            (0, 12),
            (0, 13),
            (1, 13),
            (1, 4),
        ]))
    }

    /// A gin hand: one 3-card run and two 4-card melds, nothing left over
    pub fn with_gin_hand(self) -> Self {
        self.with_cards(cards![
            Six Diamonds, Seven Diamonds, Eight Diamonds,
            Queen Spades, Queen Hearts, Queen Diamonds, Queen Clubs,
            Ace Clubs, Two Clubs, Three Clubs, Four Clubs,
        ])
    }

    pub fn with_run(self, suit: Suit, low: Rank, len: u8) -> Self {
        let cards = (0..len)
            .map(|offset| {
                let rank = Rank::try_from(low.value() + offset).expect("run stays within ranks");
                Card::new(rank, suit)
            })
            .collect();
        self.with_cards(cards)
    }

    pub fn with_card(mut self, rank: Rank, suit: Suit) -> Self {
        self.cards.push(Card::new(rank, suit));
        self
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards.extend(cards);
        self
    }

    pub fn build(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for HandBuilder {
    fn default() -> Self {
        Self::new()
    }
}
