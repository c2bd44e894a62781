use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{ExtractionPlan, MeldRules, MeldSize, SetRule, StrategyKind};

pub const STRATEGY_VAR: &str = "GIN_MELD_STRATEGY";
pub const SET_RULE_VAR: &str = "GIN_SET_RULE";
pub const PLAN_VAR: &str = "GIN_MELD_PLAN";
pub const DEAL_SEED_VAR: &str = "GIN_DEAL_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown meld strategy: {0}")]
    InvalidStrategy(String),
    #[error("Unknown set rule: {0}")]
    InvalidSetRule(String),
    #[error("Invalid meld plan: {0}")]
    InvalidPlan(String),
    #[error("Invalid deal seed: {0}")]
    InvalidSeed(String),
    #[error("Invalid config JSON: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(value.to_string())
    }
}

/// Settings for a `HandReducer` and the demo deal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    pub strategy: StrategyKind,
    pub set_rule: SetRule,
    pub plan: ExtractionPlan,
    /// Fixed seed for shuffling; a fresh random deal when unset
    pub deal_seed: Option<u64>,
}

impl ReducerConfig {
    pub fn rules(&self) -> MeldRules {
        MeldRules::new(self.set_rule)
    }

    /// Read overrides from `GIN_*` environment variables, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(STRATEGY_VAR) {
            config.strategy = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidStrategy(value.clone()))?;
        }
        if let Some(value) = lookup(SET_RULE_VAR) {
            config.set_rule = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSetRule(value.clone()))?;
        }
        if let Some(value) = lookup(PLAN_VAR) {
            config.plan = parse_plan(&value)?;
        }
        if let Some(value) = lookup(DEAL_SEED_VAR) {
            let seed = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(value.clone()))?;
            config.deal_seed = Some(seed);
        }

        Ok(config)
    }
}

/// Parse a comma separated list of meld sizes such as `3,4,4`.
pub fn parse_plan(value: &str) -> Result<ExtractionPlan, ConfigError> {
    let slots = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .ok()
                .and_then(|len| MeldSize::try_from(len).ok())
                .ok_or_else(|| ConfigError::InvalidPlan(value.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExtractionPlan::new(slots))
}
