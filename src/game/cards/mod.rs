pub mod basic;
pub mod hands;
pub mod melds;


pub use basic::{Card, CardError, Rank, Suit};
pub use hands::{remove_meld, HandError};
pub use melds::{
    is_meld, is_run, is_set, is_set_with, Meld, MeldError, MeldKind, MeldRules, MeldSize, SetRule,
};
