// Core game logic modules
pub mod board;
pub mod error;
pub mod lines;
pub mod mark;
pub mod moves;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, GameStatus};
pub use error::BoardError;
pub use lines::{Direction, LineTable};
pub use mark::Mark;
pub use moves::Move;
pub use position::Position;
