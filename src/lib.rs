// Library crate for the Gin Rummy meld reducer
// This file exposes the public API for integration tests

pub mod config;
pub mod game;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::ReducerConfig;
pub use game::{find_melds, Card, HandReducer, Rank, Reduction, Suit};
pub use shared::GinError;
