/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board configuration: n={n}, k={k} (need n >= 3 and 3 <= k <= n)")]
    InvalidConfig { n: usize, k: usize },

    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("invalid mark: {0:?}")]
    InvalidMark(String),
}
