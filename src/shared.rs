use thiserror::Error;

use crate::config::ConfigError;
use crate::game::{CardError, DeckError, HandError, MeldError};

/// Top-level error for everything the crate can fail on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GinError {
    #[error("Card error: {0}")]
    Card(#[from] CardError),

    #[error("Meld error: {0}")]
    Meld(#[from] MeldError),

    #[error("Hand error: {0}")]
    Hand(#[from] HandError),

    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
