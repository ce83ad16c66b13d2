use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::{deck::Card, error::GameError, hand::Hand};

const BASIC_STRATEGY: &str = include_str!("basic_strategy.json");

/// Table rows keyed by player total, cells keyed by dealer label, values
/// are action codes.
type StrategyTable = HashMap<String, HashMap<String, String>>;

#[derive(Debug, Clone, Deserialize)]
pub struct StrategyInput {
    pub hard: StrategyTable,
    pub soft: StrategyTable,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
}

impl Action {
    pub fn from_code(code: &str) -> Option<Action> {
        match code {
            "H" => Some(Action::Hit),
            "S" => Some(Action::Stand),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Hit => write!(f, "Hit"),
            Action::Stand => write!(f, "Stand"),
        }
    }
}

type ActionTable = HashMap<u8, HashMap<String, Action>>;

#[derive(Debug, Clone)]
pub struct Strategy {
    hard: ActionTable,
    soft: ActionTable,
}

impl Strategy {
    /// Textbook hit/stand basic strategy, dealer standing on all 17s.
    pub fn basic() -> Result<Self, GameError> {
        Self::from_json(BASIC_STRATEGY)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let input: StrategyInput = serde_json::from_str(json)?;
        Self::from_input(input)
    }

    pub fn from_input(input: StrategyInput) -> Result<Self, GameError> {
        Ok(Strategy {
            hard: parse_table(input.hard)?,
            soft: parse_table(input.soft)?,
        })
    }

    pub fn advise(&self, hand: &Hand, dealer_up: &Card) -> Action {
        let score = hand.score();
        let dealer = dealer_label(dealer_up);

        let found = match score.soft {
            Some(soft) => lookup_action_map(&self.soft, soft, &dealer),
            None => lookup_action_map(&self.hard, score.hard, &dealer),
        };

        found.unwrap_or_else(|| default_action(score.best()))
    }
}

pub fn dealer_label(card: &Card) -> String {
    if card.is_ace() {
        "A".to_string()
    } else {
        card.rank.value().to_string()
    }
}

fn lookup_action_map(table: &ActionTable, total: u8, dealer: &str) -> Option<Action> {
    table.get(&total)?.get(dealer).copied()
}

fn parse_table(table: StrategyTable) -> Result<ActionTable, GameError> {
    let mut parsed = HashMap::new();
    for (total, row) in table {
        let key = total
            .parse::<u8>()
            .map_err(|_| GameError::Strategy(format!("row key '{total}' is not a total")))?;
        let mut cells = HashMap::new();
        for (dealer, code) in row {
            let action = Action::from_code(&code).ok_or_else(|| {
                GameError::Strategy(format!("unknown action '{code}' at {total} vs {dealer}"))
            })?;
            cells.insert(dealer, action);
        }
        parsed.insert(key, cells);
    }
    Ok(parsed)
}

fn default_action(total: u8) -> Action {
    if total < 17 {
        Action::Hit
    } else {
        Action::Stand
    }
}
