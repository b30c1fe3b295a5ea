/// Row/column coordinates of a cell on an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize, n: usize) -> Option<Self> {
        if row < n && col < n {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_index(index: usize, n: usize) -> Self {
        Self {
            row: index / n,
            col: index % n,
        }
    }

    pub fn to_index(self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// Manhattan distance to the board center, doubled so it stays integral
    /// on even-sized boards.
    pub fn center_distance2(self, n: usize) -> usize {
        let span = n.saturating_sub(1);
        (2 * self.row).abs_diff(span) + (2 * self.col).abs_diff(span)
    }
}
