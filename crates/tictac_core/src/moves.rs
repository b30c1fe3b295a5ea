use crate::{Board, Mark, Position};

/// A mark placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
}

impl Move {
    pub fn new(index: usize, mark: Mark) -> Self {
        Self { index, mark }
    }

    pub fn at(pos: Position, n: usize, mark: Mark) -> Self {
        Self::new(pos.to_index(n), mark)
    }

    /// On the board and targeting an empty cell.
    pub fn is_legal(&self, board: &Board) -> bool {
        self.index < board.cells().len() && board.get(self.index).is_none()
    }
}
