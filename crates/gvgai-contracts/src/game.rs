//! Game observation and action types.
//!
//! These are the values the engine sends and the agent answers with. The
//! client does not simulate the game; it only carries what the engine
//! reports, so everything here is plain data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One action the avatar can take on a game tick.
///
/// Encoded on the wire with the engine's `ACTION_*` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "ACTION_NIL")]
    Nil,
    #[serde(rename = "ACTION_USE")]
    Use,
    #[serde(rename = "ACTION_LEFT")]
    Left,
    #[serde(rename = "ACTION_RIGHT")]
    Right,
    #[serde(rename = "ACTION_DOWN")]
    Down,
    #[serde(rename = "ACTION_UP")]
    Up,
    #[serde(rename = "ACTION_ESCAPE")]
    Escape,
}

impl Action {
    /// The wire name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Nil => "ACTION_NIL",
            Action::Use => "ACTION_USE",
            Action::Left => "ACTION_LEFT",
            Action::Right => "ACTION_RIGHT",
            Action::Down => "ACTION_DOWN",
            Action::Up => "ACTION_UP",
            Action::Escape => "ACTION_ESCAPE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a game from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    /// The game is still running, or ended without a winner.
    #[default]
    NoWinner,
    PlayerWins,
    PlayerLoses,
}

/// A snapshot of the game as observed by the player on one tick.
///
/// `extras` carries whatever else the engine reports (observation grids,
/// resources, NPC positions). The client passes it to the agent untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Tick counter of the game, starting at 0.
    pub game_tick: u64,
    /// Current score of the player.
    pub game_score: f64,
    /// Whether the game has finished.
    #[serde(default)]
    pub is_game_over: bool,
    /// Result of the game; `NoWinner` until it finishes.
    #[serde(default)]
    pub game_winner: Winner,
    /// Avatar position in pixels, if the avatar is alive.
    #[serde(default)]
    pub avatar_position: Option<[f64; 2]>,
    /// Actions the avatar may take on this tick.
    #[serde(default)]
    pub available_actions: Vec<Action>,
    /// Engine-specific remainder of the observation.
    #[serde(default)]
    pub extras: serde_json::Value,
}
