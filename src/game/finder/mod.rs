pub mod greedy;
pub mod optimal;
pub mod strategy_factory;
pub mod types;

pub use greedy::{find_four_meld, find_meld, find_three_meld, GreedyFinder};
pub use optimal::OptimalFinder;
pub use strategy_factory::FinderFactory;
pub use types::{ExtractionPlan, MeldFinder, StrategyKind};
