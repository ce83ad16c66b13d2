pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod stats;
pub mod strategy;

use std::io::{BufRead, Write};

pub use config::TableConfig;
pub use console::Console;
pub use error::GameError;
pub use game::{Outcome, Table};
pub use stats::SessionStats;
pub use strategy::{Action, Strategy};

/// Plays an interactive session with the built-in basic strategy.
pub fn play_session<R: BufRead, W: Write>(
    config: TableConfig,
    input: R,
    output: W,
) -> Result<SessionStats, GameError> {
    let strategy = Strategy::basic()?;
    let mut table = Table::new(config, strategy);
    let mut console = Console::new(input, output);
    table.run_session(&mut console)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_play_session_quits() {
        let mut out = Vec::new();
        let stats = play_session(TableConfig::default(), Cursor::new("Q\n"), &mut out).unwrap();
        assert_eq!(stats, SessionStats::default());
        assert_eq!(String::from_utf8(out).unwrap(), "(N)ew round or (Q)uit? ");
    }
}
