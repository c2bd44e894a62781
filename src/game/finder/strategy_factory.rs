use std::sync::Arc;

use super::{
    greedy::GreedyFinder,
    optimal::OptimalFinder,
    types::{MeldFinder, StrategyKind},
};

/// Factory for creating meld finders based on the configured strategy
pub struct FinderFactory;

impl FinderFactory {
    pub fn create_finder(kind: StrategyKind) -> Arc<dyn MeldFinder> {
        match kind {
            StrategyKind::Greedy => Arc::new(GreedyFinder::new()),
            StrategyKind::Optimal => Arc::new(OptimalFinder::new()),
        }
    }
}
