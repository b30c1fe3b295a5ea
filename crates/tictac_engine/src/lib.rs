pub mod ai;
pub mod clock;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod random;
pub mod search;
pub mod selfplay;

pub use ai::{ComputerPlayer, Player, Strategy};
pub use clock::{Clock, StepClock, SystemClock};
pub use config::SearchConfig;
pub use error::EngineError;
pub use evaluation::{evaluate, WIN_SCORE};
pub use random::{pick_random, pick_random_with};
pub use search::{pick_best, pick_best_with_clock, search_best_move, SearchReport};
pub use selfplay::{play_game, play_many, GameRecord, MatchSummary};
