use std::fmt;
use strum_macros::{Display, EnumString};
use thiserror::Error;

use super::basic::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeldError {
    #[error("Invalid meld size: {0}")]
    InvalidMeldSize(usize),
    #[error("Cards do not form a run or a set")]
    NotAMeld,
    #[error("Meld labelled {claimed} is a {actual}")]
    KindMismatch { claimed: MeldKind, actual: MeldKind },
}

/// How strictly a group of equal-rank cards is checked.
///
/// `Permissive` only compares ranks, so a "set" may repeat a suit or even a
/// card. Standard Gin rules want `DistinctSuits`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SetRule {
    #[default]
    Permissive,
    DistinctSuits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum MeldSize {
    Three = 3,
    Four = 4,
}

impl MeldSize {
    pub fn card_count(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for MeldSize {
    type Error = MeldError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(MeldSize::Three),
            4 => Ok(MeldSize::Four),
            _ => Err(MeldError::InvalidMeldSize(value)),
        }
    }
}

impl From<MeldSize> for usize {
    fn from(size: MeldSize) -> Self {
        size.card_count()
    }
}

/// True for 3 or 4 cards that form a run or a set.
pub fn is_meld(cards: &[Card]) -> bool {
    MeldRules::default().is_meld(cards)
}

/// True when every card shares the first card's rank. Suits are not compared.
pub fn is_set(cards: &[Card]) -> bool {
    is_set_with(cards, SetRule::Permissive)
}

pub fn is_set_with(cards: &[Card], rule: SetRule) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    if !cards.iter().all(|card| card.rank == first.rank) {
        return false;
    }

    match rule {
        SetRule::Permissive => true,
        SetRule::DistinctSuits => {
            let mut seen: Vec<Suit> = Vec::with_capacity(cards.len());
            for card in cards {
                if seen.contains(&card.suit) {
                    return false;
                }
                seen.push(card.suit);
            }
            true
        }
    }
}

/// True when the cards, sorted by rank, are one suit with no gaps or repeats.
///
/// Ace is always low; there is no King-Ace wraparound.
pub fn is_run(cards: &[Card]) -> bool {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| card.rank);

    let Some(first) = sorted.first() else {
        return false;
    };

    sorted.windows(2).all(|pair| {
        pair[1].suit == first.suit && pair[1].rank.value() == pair[0].rank.value() + 1
    })
}

/// The validation rules a finder applies to candidate melds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MeldRules {
    pub set_rule: SetRule,
}

impl MeldRules {
    pub fn new(set_rule: SetRule) -> Self {
        Self { set_rule }
    }

    pub fn is_set(&self, cards: &[Card]) -> bool {
        is_set_with(cards, self.set_rule)
    }

    pub fn is_meld(&self, cards: &[Card]) -> bool {
        self.classify(cards).is_ok()
    }

    pub fn classify(&self, cards: &[Card]) -> Result<MeldKind, MeldError> {
        MeldSize::try_from(cards.len())?;

        if is_run(cards) {
            Ok(MeldKind::Run)
        } else if self.is_set(cards) {
            Ok(MeldKind::Set)
        } else {
            Err(MeldError::NotAMeld)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeldKind {
    Run,
    Set,
}

impl fmt::Display for MeldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeldKind::Run => write!(f, "run"),
            MeldKind::Set => write!(f, "set"),
        }
    }
}

/// A validated run or set. Cards stay in the order they were given, which for
/// melds produced by a finder is hand order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "MeldRecord")]
pub struct Meld {
    kind: MeldKind,
    cards: Vec<Card>,
}

/// Wire shape of a meld before its cards are checked.
#[derive(serde::Deserialize)]
struct MeldRecord {
    kind: MeldKind,
    cards: Vec<Card>,
}

impl TryFrom<MeldRecord> for Meld {
    type Error = MeldError;

    fn try_from(record: MeldRecord) -> Result<Self, Self::Error> {
        let meld = Meld::new(record.cards)?;
        if meld.kind != record.kind {
            return Err(MeldError::KindMismatch {
                claimed: record.kind,
                actual: meld.kind,
            });
        }
        Ok(meld)
    }
}

impl Meld {
    pub fn new(cards: Vec<Card>) -> Result<Self, MeldError> {
        Self::with_rules(cards, &MeldRules::default())
    }

    pub fn with_rules(cards: Vec<Card>, rules: &MeldRules) -> Result<Self, MeldError> {
        let kind = rules.classify(&cards)?;
        Ok(Self { kind, cards })
    }

    pub fn kind(&self) -> MeldKind {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(|card| card.to_string()).collect();
        write!(f, "{}[{}]", self.kind, cards.join(" "))
    }
}
