use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GameError {
    Io(io::Error),
    DeckExhausted,
    Strategy(String),
    Config(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(err) => write!(f, "console i/o failed: {err}"),
            GameError::DeckExhausted => write!(f, "no cards left in the deck"),
            GameError::Strategy(msg) => write!(f, "invalid strategy table: {msg}"),
            GameError::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Strategy(err.to_string())
    }
}
