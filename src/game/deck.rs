use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::game::cards::Card;

pub const HAND_SIZE: usize = 10;
pub const SHUFFLE_PASSES: usize = 6;
pub const DISCARD_PILE_CAPACITY: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Stock is empty")]
    StockExhausted,
    #[error("Discard pile is full")]
    DiscardPileFull,
    #[error("Discard pile is empty")]
    DiscardPileEmpty,
}

/// A 52-card deck, dealt from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Unshuffled deck, suit by suit, Ace to King
    pub fn standard() -> Self {
        Self {
            cards: Card::all_cards().into(),
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all_cards();
        for _ in 0..SHUFFLE_PASSES {
            cards.shuffle(rng);
        }
        Self {
            cards: cards.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    fn deal_hand(&mut self) -> Result<Vec<Card>, DeckError> {
        (0..HAND_SIZE)
            .map(|_| self.draw().ok_or(DeckError::StockExhausted))
            .collect()
    }
}

/// Table state right after the deal: two hands, the stock and an empty
/// discard pile.
#[derive(Debug, Clone)]
pub struct Deal {
    pub player_one: Vec<Card>,
    pub player_two: Vec<Card>,
    stock: Deck,
    discard_pile: Vec<Card>,
}

impl Deal {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, DeckError> {
        Self::from_deck(Deck::shuffled(rng))
    }

    /// Deal ten cards to player one, then ten to player two, from the top of
    /// `deck`. What remains becomes the stock.
    pub fn from_deck(mut deck: Deck) -> Result<Self, DeckError> {
        let player_one = deck.deal_hand()?;
        let player_two = deck.deal_hand()?;

        debug!(stock = deck.len(), "Dealt two hands");

        Ok(Self {
            player_one,
            player_two,
            stock: deck,
            discard_pile: Vec::with_capacity(DISCARD_PILE_CAPACITY),
        })
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn draw_from_stock(&mut self) -> Result<Card, DeckError> {
        self.stock.draw().ok_or(DeckError::StockExhausted)
    }

    pub fn discard(&mut self, card: Card) -> Result<(), DeckError> {
        if self.discard_pile.len() >= DISCARD_PILE_CAPACITY {
            return Err(DeckError::DiscardPileFull);
        }
        self.discard_pile.push(card);
        Ok(())
    }

    pub fn take_discard(&mut self) -> Result<Card, DeckError> {
        self.discard_pile.pop().ok_or(DeckError::DiscardPileEmpty)
    }

    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }
}
