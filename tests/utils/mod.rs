#[macro_use]
pub mod hand_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use hand_builders::{hand_from_ordinals, HandBuilder};
