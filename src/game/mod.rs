// Public API
pub use cards::{
    is_meld, is_run, is_set, is_set_with, remove_meld, Card, CardError, HandError, Meld,
    MeldError, MeldKind, MeldRules, MeldSize, Rank, SetRule, Suit,
};
pub use deck::{Deal, Deck, DeckError};
pub use finder::{
    find_four_meld, find_meld, find_three_meld, ExtractionPlan, FinderFactory, GreedyFinder,
    MeldFinder, OptimalFinder, StrategyKind,
};
pub use reducer::{find_melds, HandReducer, Reduction};

// Internal modules
mod cards;
pub mod deck;
mod finder;
mod reducer;
