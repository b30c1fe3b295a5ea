use tictac_core::BoardError;

/// Errors surfaced by strategy selection and self-play.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("player chose illegal move {index} (legal: {legal:?})")]
    IllegalMove { index: usize, legal: Vec<usize> },

    #[error("no move available in an unfinished game")]
    NoMoveAvailable,

    #[error("unknown strategy {0:?} (expected \"random\" or \"alphabeta\")")]
    UnknownStrategy(String),
}
