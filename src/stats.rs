use serde::Serialize;

use crate::game::Outcome;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub rounds: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub pushes: u32,
    pub blackjacks: u32,
    pub player_busts: u32,
}

impl SessionStats {
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::PlayerBlackjack => {
                self.player_wins += 1;
                self.blackjacks += 1;
            }
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::PlayerBust => {
                self.dealer_wins += 1;
                self.player_busts += 1;
            }
            Outcome::DealerWins => self.dealer_wins += 1,
            Outcome::Push => self.pushes += 1,
        }
    }

    /// Share of rounds the player won, as a percentage.
    pub fn win_rate(&self) -> f64 {
        if self.rounds > 0 {
            (self.player_wins as f64 / self.rounds as f64) * 100.0
        } else {
            0.0
        }
    }

    /// JSON summary of the session, tallies plus `winRate`.
    pub fn summary(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Summary {
            stats: self,
            win_rate: self.win_rate(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    #[serde(flatten)]
    stats: &'a SessionStats,
    win_rate: f64,
}
