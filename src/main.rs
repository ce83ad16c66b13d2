use std::io;

use anyhow::Result;
use blackjack_console::{play_session, TableConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = TableConfig::from_env();

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(config, stdin.lock(), stdout.lock())?;
    Ok(())
}
