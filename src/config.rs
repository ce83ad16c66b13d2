use std::env;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const SEED_VAR: &str = "BLACKJACK_SEED";
pub const DEALER_STANDS_ON_VAR: &str = "BLACKJACK_DEALER_STANDS_ON";

fn default_seed() -> u64 {
    42
}

fn default_dealer_stands_on() -> u8 {
    17
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seeds the shuffle rng once per session, so every run replays the
    /// same rounds.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Dealer draws while the best total is below this.
    #[serde(default = "default_dealer_stands_on")]
    pub dealer_stands_on: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            seed: default_seed(),
            dealer_stands_on: default_dealer_stands_on(),
        }
    }
}

impl TableConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Each variable falls back to its own default when unset or invalid,
    /// so one bad value never discards the others.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TableConfig::default();
        match parse_var(&lookup, SEED_VAR) {
            Ok(Some(seed)) => config.seed = seed,
            Ok(None) => {}
            Err(err) => warn!("[CONFIG] {err}, using seed {}", config.seed),
        }
        match parse_var(&lookup, DEALER_STANDS_ON_VAR).and_then(check_stands_on) {
            Ok(Some(stands_on)) => config.dealer_stands_on = stands_on,
            Ok(None) => {}
            Err(err) => warn!(
                "[CONFIG] {err}, dealer stands on {}",
                config.dealer_stands_on
            ),
        }
        config
    }
}

fn check_stands_on(value: Option<u8>) -> Result<Option<u8>, GameError> {
    match value {
        Some(v) if !(2..=21).contains(&v) => Err(GameError::Config(format!(
            "{DEALER_STANDS_ON_VAR} must be between 2 and 21, got {v}"
        ))),
        other => Ok(other),
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, GameError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| GameError::Config(format!("{key}={raw:?} is not a valid number"))),
    }
}
