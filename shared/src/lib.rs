use serde::{Deserialize, Serialize};

mod badge;
mod progress;
mod streak;

pub use badge::*;
pub use progress::*;
pub use streak::*;

pub type UserId = String;

/// Outcome of one finished game, reported by a game client.
///
/// Points are carried signed so that the ledger, not the transport layer,
/// decides what counts as valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_id: String,
    pub points: i64,
    pub perfect_score: bool,
}

impl GameResult {
    pub fn new(game_id: impl Into<String>, points: i64, perfect_score: bool) -> Self {
        Self {
            game_id: game_id.into(),
            points,
            perfect_score,
        }
    }
}
