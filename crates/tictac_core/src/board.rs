use std::fmt;
use std::sync::Arc;

use crate::{BoardError, LineTable, Mark, Move, Position};

pub const MIN_SIZE: usize = 3;
pub const MIN_WIN_LENGTH: usize = 3;

/// Which of the four mutually exclusive classes a position is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Won(Mark),
    Draw,
    InProgress,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// An N×N grid stored row-major: cell (row, col) lives at `row * n + col`.
#[derive(Debug, Clone)]
pub struct Board {
    n: usize,
    k: usize,
    cells: Vec<Option<Mark>>,
    lines: Arc<LineTable>,
}

impl Board {
    /// Empty board of `n * n` cells where `k` in a row wins.
    pub fn new(n: usize, k: usize) -> Result<Self, BoardError> {
        validate_shape(n, k)?;
        Ok(Self {
            n,
            k,
            cells: vec![None; n * n],
            lines: LineTable::for_shape(n, k),
        })
    }

    /// Board holding an explicit position, e.g. one captured mid-game.
    pub fn from_cells(n: usize, k: usize, cells: Vec<Option<Mark>>) -> Result<Self, BoardError> {
        validate_shape(n, k)?;
        if cells.len() != n * n {
            return Err(BoardError::CellCountMismatch {
                expected: n * n,
                actual: cells.len(),
            });
        }
        Ok(Self {
            n,
            k,
            cells,
            lines: LineTable::for_shape(n, k),
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn win_length(&self) -> usize {
        self.k
    }

    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    pub fn lines(&self) -> &LineTable {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn get_at(&self, row: usize, col: usize) -> Option<Mark> {
        Position::new(row, col, self.n).and_then(|pos| self.get(pos.to_index(self.n)))
    }

    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indices of all empty cells, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Places `mark` at `index` if the index is on the board and the cell is
    /// empty. Returns whether the board changed.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_none() => {
                *cell = Some(mark);
                true
            }
            _ => false,
        }
    }

    pub fn make_move(&mut self, mv: Move) -> bool {
        self.apply_move(mv.index, mv.mark)
    }

    /// Clears an occupied cell. Returns whether the board changed.
    pub fn undo_move(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_some() => {
                *cell = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Mark owning the first fully uniform segment in scan order, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.lines.iter().find_map(|segment| {
            let first = self.cells[segment[0]]?;
            segment[1..]
                .iter()
                .all(|&idx| self.cells[idx] == Some(first))
                .then_some(first)
        })
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Winner is checked before fullness: a full board can still be a win.
    pub fn outcome(&self) -> GameStatus {
        if let Some(mark) = self.winner() {
            GameStatus::Won(mark)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

fn validate_shape(n: usize, k: usize) -> Result<(), BoardError> {
    if n < MIN_SIZE || k < MIN_WIN_LENGTH || k > n {
        return Err(BoardError::InvalidConfig { n, k });
    }
    Ok(())
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.k == other.k && self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.chunks(self.n).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', Mark::symbol).to_string())
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
