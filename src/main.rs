use ginrummy::{
    game::{Card, Deal, HandReducer},
    ReducerConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The scripted hand, as (suit, rank) ordinals
const SCENARIO_HAND: [(u8, u8); 10] = [
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
];

fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ginrummy=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ReducerConfig::from_env()?;
    info!(
        strategy = %config.strategy,
        set_rule = %config.set_rule,
        seed = ?config.deal_seed,
        "Starting Gin Rummy meld demo"
    );

    let reducer = HandReducer::new(&config);

    let deal = match config.deal_seed {
        Some(seed) => Deal::new(&mut StdRng::seed_from_u64(seed))?,
        None => Deal::new(&mut rand::rng())?,
    };
    for (player, hand) in [("one", &deal.player_one), ("two", &deal.player_two)] {
        let leftover = reducer.find_melds(hand)?;
        info!(
            player,
            hand = %format_hand(hand),
            deadwood = %format_hand(&leftover),
            "Dealt hand"
        );
    }

    let hand = SCENARIO_HAND
        .iter()
        .map(|&(suit, rank)| Card::from_ordinals(suit, rank))
        .collect::<Result<Vec<_>, _>>()?;

    let reduction = reducer.reduce(&hand)?;
    for meld in &reduction.melds {
        info!(meld = %meld, "Scenario meld");
    }

    println!("{}", serde_json::to_string(&reduction.leftover)?);
    Ok(())
}
