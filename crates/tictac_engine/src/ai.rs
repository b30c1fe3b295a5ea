use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tictac_core::{Board, Mark};

use crate::config::SearchConfig;
use crate::error::EngineError;
use crate::random::pick_random_with;
use crate::search::pick_best;

/// How the computer picks its move. Chosen once by whoever runs the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    AlphaBeta(SearchConfig),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::AlphaBeta(_) => write!(f, "alphabeta"),
        }
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "alphabeta" | "alpha-beta" => Ok(Strategy::AlphaBeta(SearchConfig::default())),
            _ => Err(EngineError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Anything that can pick a cell for `me` on a board.
pub trait Player {
    /// Move for `me`, or `None` if the player has nothing to play.
    fn choose_move(&mut self, board: &Board, me: Mark) -> Option<usize>;
}

/// A computer opponent: a strategy plus the randomness it draws on.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    strategy: Strategy,
    rng: StdRng,
}

impl ComputerPlayer {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Only affects the alpha-beta strategy.
    pub fn set_time_budget(&mut self, budget: Duration) {
        if let Strategy::AlphaBeta(config) = &mut self.strategy {
            config.time_budget = budget;
        }
    }
}

impl Player for ComputerPlayer {
    // `None` only when the board has no empty cell
    fn choose_move(&mut self, board: &Board, me: Mark) -> Option<usize> {
        let moves = board.available_moves();
        match &self.strategy {
            Strategy::Random => pick_random_with(&mut self.rng, &moves),
            Strategy::AlphaBeta(config) => pick_best(board, &moves, me, me.opponent(), config),
        }
    }
}
