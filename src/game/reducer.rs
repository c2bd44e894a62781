use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ReducerConfig;
use crate::game::cards::{remove_meld, Card, Meld, MeldRules};
use crate::game::finder::{ExtractionPlan, FinderFactory, MeldFinder};
use crate::shared::GinError;

/// Outcome of one reduction pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// Extracted melds, in extraction order
    pub melds: Vec<Meld>,
    /// Cards no meld absorbed, in their original relative order
    pub leftover: Vec<Card>,
}

/// Pulls melds out of a hand with a bounded number of attempts.
///
/// The reducer never touches the caller's hand: it works on a copy and hands
/// back what is left.
#[derive(Clone)]
pub struct HandReducer {
    finder: Arc<dyn MeldFinder>,
    plan: ExtractionPlan,
    rules: MeldRules,
}

impl HandReducer {
    pub fn new(config: &ReducerConfig) -> Self {
        Self {
            finder: FinderFactory::create_finder(config.strategy),
            plan: config.plan.clone(),
            rules: config.rules(),
        }
    }

    pub fn with_finder(
        finder: Arc<dyn MeldFinder>,
        plan: ExtractionPlan,
        rules: MeldRules,
    ) -> Self {
        Self {
            finder,
            plan,
            rules,
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.finder.strategy_name()
    }

    /// Remove melds from a copy of `hand` and return what is left.
    pub fn find_melds(&self, hand: &[Card]) -> Result<Vec<Card>, GinError> {
        Ok(self.reduce(hand)?.leftover)
    }

    pub fn reduce(&self, hand: &[Card]) -> Result<Reduction, GinError> {
        let mut working = hand.to_vec();

        let too_small = self
            .plan
            .smallest_meld()
            .is_none_or(|smallest| hand.len() < smallest);
        if too_small {
            debug!(hand_size = hand.len(), "Hand too small to hold a meld");
            return Ok(Reduction {
                melds: vec![],
                leftover: working,
            });
        }

        let melds = self.finder.select_melds(hand, &self.plan, &self.rules)?;
        // Finders only propose melds; the leftover is always cut here, so a
        // finder that returns cards the hand lacks fails the whole reduction.
        for meld in &melds {
            remove_meld(meld.cards(), &mut working)?;
            debug!(kind = %meld.kind(), meld = %meld, remaining = working.len(), "Extracted meld");
        }

        info!(
            strategy = self.finder.strategy_name(),
            hand_size = hand.len(),
            melds_found = melds.len(),
            leftover = working.len(),
            "Reduced hand"
        );

        Ok(Reduction {
            melds,
            leftover: working,
        })
    }
}

impl Default for HandReducer {
    fn default() -> Self {
        Self::new(&ReducerConfig::default())
    }
}

/// Reduce `hand` with the default greedy reducer.
pub fn find_melds(hand: &[Card]) -> Result<Vec<Card>, GinError> {
    HandReducer::default().find_melds(hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{MeldKind, MeldSize, Rank, SetRule, Suit};
    use crate::game::cards::HandError;
    use crate::game::finder::{OptimalFinder, StrategyKind};
    use rstest::rstest;

    /// Proposes one fixed meld regardless of the hand.
    struct FixedMeldFinder(Meld);

    impl MeldFinder for FixedMeldFinder {
        fn select_melds(
            &self,
            _hand: &[Card],
            _plan: &ExtractionPlan,
            _rules: &MeldRules,
        ) -> Result<Vec<Meld>, HandError> {
            Ok(vec![self.0.clone()])
        }

        fn strategy_name(&self) -> &'static str {
            "FixedMeldFinder"
        }
    }

    fn scenario_hand() -> Vec<Card> {
        [
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
        ]
        .iter()
        .map(|&(suit, rank)| Card::from_ordinals(suit, rank).unwrap())
        .collect()
    }

    #[test]
    fn test_scenario_hand_leftover() {
        let hand = scenario_hand();
        let reduction = HandReducer::default().reduce(&hand).unwrap();

        assert_eq!(reduction.melds.len(), 1);
        assert_eq!(reduction.melds[0].kind(), MeldKind::Set);
        assert_eq!(reduction.melds[0].cards(), &hand[..3]);

        let expected: Vec<Card> = [(1, 10), (1, 9), (1, 8), (0, 12), (0, 13), (1, 13), (1, 4)]
            .iter()
            .map(|&(suit, rank)| Card::from_ordinals(suit, rank).unwrap())
            .collect();
        assert_eq!(reduction.leftover, expected);
    }

    #[test]
    fn test_reducer_does_not_mutate_input() {
        let hand = scenario_hand();
        let before = hand.clone();
        let leftover = find_melds(&hand).unwrap();
        assert_eq!(hand, before);
        assert_eq!(leftover.len(), 7);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![Card::new(Rank::Ten, Suit::Hearts)])]
    #[case(vec![Card::new(Rank::Ten, Suit::Hearts), Card::new(Rank::Ten, Suit::Spades)])]
    fn test_short_hands_come_back_unchanged(#[case] hand: Vec<Card>) {
        let reduction = HandReducer::default().reduce(&hand).unwrap();
        assert!(reduction.melds.is_empty());
        assert_eq!(reduction.leftover, hand);
    }

    #[test]
    fn test_three_then_two_fours() {
        let hand = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Queen, Suit::Diamonds),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
        ];

        let reduction = HandReducer::default().reduce(&hand).unwrap();

        let sizes: Vec<usize> = reduction.melds.iter().map(|meld| meld.len()).collect();
        assert_eq!(sizes, vec![3, 4, 4]);
        assert!(reduction.leftover.is_empty());
    }

    #[test]
    fn test_only_one_three_card_meld_is_taken() {
        let hand = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Spades),
        ];

        let leftover = HandReducer::default().find_melds(&hand).unwrap();
        assert_eq!(leftover, hand[3..].to_vec());
    }

    #[test]
    fn test_custom_plan_loops_more() {
        let hand = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Spades),
        ];
        let config = ReducerConfig {
            plan: ExtractionPlan::new(vec![MeldSize::Three, MeldSize::Three]),
            ..ReducerConfig::default()
        };

        let leftover = HandReducer::new(&config).find_melds(&hand).unwrap();
        assert!(leftover.is_empty());
    }

    #[test]
    fn test_four_card_only_plan_skips_three_card_hands() {
        let hand = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
        ];
        let config = ReducerConfig {
            plan: ExtractionPlan::new(vec![MeldSize::Four]),
            ..ReducerConfig::default()
        };

        let reduction = HandReducer::new(&config).reduce(&hand).unwrap();
        assert!(reduction.melds.is_empty());
        assert_eq!(reduction.leftover, hand);
    }

    #[test]
    fn test_distinct_suits_rule_changes_the_pick() {
        let hand = vec![
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
        ];
        let config = ReducerConfig {
            set_rule: SetRule::DistinctSuits,
            ..ReducerConfig::default()
        };

        // Permissive: TH TH TS is a set
        let leftover = HandReducer::default().find_melds(&hand).unwrap();
        assert_eq!(
            leftover,
            vec![
                Card::new(Rank::Nine, Suit::Hearts),
                Card::new(Rank::Eight, Suit::Hearts),
            ]
        );

        // Distinct suits: first legal triple is the TH 9H 8H run
        let leftover = HandReducer::new(&config).find_melds(&hand).unwrap();
        assert_eq!(
            leftover,
            vec![
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Ten, Suit::Spades),
            ]
        );
    }

    #[test]
    fn test_optimal_reducer() {
        let hand = vec![
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
        ];
        let config = ReducerConfig {
            strategy: StrategyKind::Optimal,
            ..ReducerConfig::default()
        };
        let reducer = HandReducer::new(&config);
        assert_eq!(reducer.strategy_name(), "OptimalFinder");

        let leftover = reducer.find_melds(&hand).unwrap();
        assert_eq!(
            leftover,
            vec![
                Card::new(Rank::Five, Suit::Spades),
                Card::new(Rank::Five, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn test_with_finder() {
        let reducer = HandReducer::with_finder(
            Arc::new(OptimalFinder::new()),
            ExtractionPlan::new(vec![MeldSize::Three]),
            MeldRules::default(),
        );
        assert_eq!(reducer.strategy_name(), "OptimalFinder");

        let hand = scenario_hand();
        let reduction = reducer.reduce(&hand).unwrap();
        assert_eq!(reduction.melds.len(), 1);
        assert_eq!(reduction.leftover.len(), 7);
    }

    #[test]
    fn test_finder_meld_missing_from_hand_is_an_error() {
        let clubs_run = Meld::new(vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
        ])
        .unwrap();
        let reducer = HandReducer::with_finder(
            Arc::new(FixedMeldFinder(clubs_run)),
            ExtractionPlan::default(),
            MeldRules::default(),
        );

        let hand = scenario_hand();
        let err = reducer.reduce(&hand).unwrap_err();
        assert_eq!(
            err,
            GinError::Hand(HandError::CardNotInHand(Card::new(Rank::Two, Suit::Clubs)))
        );
    }

    #[test]
    fn test_reduction_json_rejects_bogus_meld() {
        let reduction = HandReducer::default().reduce(&scenario_hand()).unwrap();
        let json = serde_json::to_string(&reduction).unwrap();
        assert_eq!(serde_json::from_str::<Reduction>(&json).unwrap(), reduction);

        let bogus = r#"{
            "melds": [{"kind": "run", "cards": [{"suit": 0, "rank": 1}, {"suit": 2, "rank": 9}]}],
            "leftover": []
        }"#;
        assert!(serde_json::from_str::<Reduction>(bogus).is_err());
    }
}
