use std::io::{BufRead, Write};

use log::{debug, info, warn};
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    config::TableConfig,
    console::Console,
    deck::{Card, Deck},
    error::GameError,
    hand::Hand,
    stats::SessionStats,
    strategy::Strategy,
};

const ROUND_PROMPT: &str = "(N)ew round or (Q)uit? ";
const TURN_PROMPT: &str = "(H)it, (S)tand, or (A)dvice? ";
const ROUND_SEPARATOR: &str = "******************************************";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerBlackjack,
    PlayerWins,
    PlayerBust,
    DealerWins,
    Push,
}

impl Outcome {
    pub fn verdict(&self) -> &'static str {
        match self {
            Outcome::PlayerBlackjack | Outcome::PlayerWins => "Player wins!",
            Outcome::PlayerBust | Outcome::DealerWins => "Dealer wins!",
            Outcome::Push => "Push!",
        }
    }
}

/// How the player's turn ended.
enum Turn {
    Stood,
    /// Settled before the dealer draws.
    Decided(Outcome),
    InputEnded,
}

/// Decides a round where the player stood and the dealer has finished
/// drawing.
pub fn settle(player: &Hand, dealer: &Hand) -> Outcome {
    if dealer.is_blackjack() {
        return Outcome::DealerWins;
    }
    if dealer.is_bust() {
        return Outcome::PlayerWins;
    }
    let player_value = player.score().best();
    let dealer_value = dealer.score().best();
    if player_value > dealer_value {
        Outcome::PlayerWins
    } else if player_value < dealer_value {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

pub struct Table {
    rng: SmallRng,
    rules: TableConfig,
    strategy: Strategy,
    stats: SessionStats,
}

impl Table {
    pub fn new(rules: TableConfig, strategy: Strategy) -> Self {
        Table {
            rng: SmallRng::seed_from_u64(rules.seed),
            rules,
            strategy,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Runs rounds until the player quits or input runs out.
    pub fn run_session<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionStats, GameError> {
        info!("[SESSION] started with seed {}", self.rules.seed);

        while let Some('N') = console.choose(ROUND_PROMPT, &['N', 'Q'])? {
            if self.play_round(console)?.is_none() {
                debug!("[SESSION] input ended mid-round");
                break;
            }
            console.say(ROUND_SEPARATOR)?;
        }

        match self.stats.summary() {
            Ok(summary) => info!("[SESSION] finished: {summary}"),
            Err(err) => warn!("[SESSION] could not serialize summary: {err}"),
        }
        Ok(self.stats.clone())
    }

    pub fn play_round<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Option<Outcome>, GameError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.play_round_with_deck(deck, console)
    }

    /// Plays one round from `deck`. Returns `None` when input ends before
    /// the player has finished their turn.
    pub fn play_round_with_deck<R: BufRead, W: Write>(
        &mut self,
        mut deck: Deck,
        console: &mut Console<R, W>,
    ) -> Result<Option<Outcome>, GameError> {
        let mut dealer = Hand::new();
        let mut player = Hand::new();
        let up = deck.draw()?;
        dealer.push(up);
        player.push(deck.draw()?);
        player.push(deck.draw()?);

        debug!("[ROUND] dealt dealer={} player={}", dealer, player);
        console.say(format!("Dealer shows {dealer}"))?;
        console.say(format!("Player shows {player}"))?;

        let outcome = match self.player_turn(&mut deck, &mut player, &up, console)? {
            Turn::InputEnded => return Ok(None),
            Turn::Decided(outcome) => outcome,
            Turn::Stood => {
                self.play_dealer(&mut deck, &mut dealer, console)?;
                settle(&player, &dealer)
            }
        };

        console.say(outcome.verdict())?;
        info!(
            "[ROUND] {:?}: player {} vs dealer {}",
            outcome,
            player.score().best(),
            dealer.score().best()
        );
        self.stats.record(outcome);
        Ok(Some(outcome))
    }

    fn player_turn<R: BufRead, W: Write>(
        &self,
        deck: &mut Deck,
        player: &mut Hand,
        up: &Card,
        console: &mut Console<R, W>,
    ) -> Result<Turn, GameError> {
        if player.is_blackjack() {
            return Ok(Turn::Decided(Outcome::PlayerBlackjack));
        }

        while !player.is_bust() {
            match console.choose(TURN_PROMPT, &['H', 'S', 'A'])? {
                None => return Ok(Turn::InputEnded),
                Some('H') => {
                    let card = deck.draw()?;
                    player.push(card);
                    debug!("[ROUND] player hits {card} -> {}", player.score_label());
                    console.say(format!("Player shows {player}"))?;
                }
                Some('A') => {
                    let action = self.strategy.advise(player, up);
                    console.say(format!("Advice: {action}"))?;
                }
                // 'S'; `choose` only returns the listed options
                Some(_) => return Ok(Turn::Stood),
            }
        }

        Ok(Turn::Decided(Outcome::PlayerBust))
    }

    fn play_dealer<R: BufRead, W: Write>(
        &self,
        deck: &mut Deck,
        dealer: &mut Hand,
        console: &mut Console<R, W>,
    ) -> Result<(), GameError> {
        loop {
            let score = dealer.score();
            if score.is_bust() || score.best() >= self.rules.dealer_stands_on {
                break;
            }
            let card = deck.draw()?;
            dealer.push(card);
            debug!("[DEALER] draws {card} -> {}", dealer.score_label());
            console.say(format!("Dealer shows {dealer}"))?;
        }
        Ok(())
    }
}
