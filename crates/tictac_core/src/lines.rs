use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// The four directions a winning segment can run in, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// (row step, column step)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// Every length-K segment of an N×N board, stored flat as K cell indices per
/// segment.
///
/// Segments are ordered by start cell (row-major), then by [`Direction::ALL`].
/// `Board::winner` relies on this order to report the first winning segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    n: usize,
    k: usize,
    cells: Vec<usize>,
}

// Tables depend only on (N, K), so every board of a given shape shares one.
static LINE_TABLES: Lazy<Mutex<HashMap<(usize, usize), Arc<LineTable>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl LineTable {
    // Callers pass a shape `Board` has already validated (3 <= k <= n)
    pub(crate) fn build(n: usize, k: usize) -> Self {
        let mut cells = Vec::new();
        let size = n as isize;
        let reach = (k - 1) as isize;
        for start in 0..n * n {
            let row = (start / n) as isize;
            let col = (start % n) as isize;

            for dir in Direction::ALL {
                let (dr, dc) = dir.delta();
                let end_row = row + reach * dr;
                let end_col = col + reach * dc;
                if !(0..size).contains(&end_row) || !(0..size).contains(&end_col) {
                    continue;
                }

                for step in 0..k as isize {
                    let r = row + step * dr;
                    let c = col + step * dc;
                    cells.push((r * size + c) as usize);
                }
            }
        }

        Self { n, k, cells }
    }

    /// Shared table for an (N, K) board shape, built on first use.
    pub(crate) fn for_shape(n: usize, k: usize) -> Arc<LineTable> {
        let mut tables = LINE_TABLES
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        tables
            .entry((n, k))
            .or_insert_with(|| {
                log::trace!("building line table for n={} k={}", n, k);
                Arc::new(LineTable::build(n, k))
            })
            .clone()
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn win_length(&self) -> usize {
        self.k
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.cells.len() / self.k
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate segments as slices of cell indices.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, usize> {
        self.cells.chunks_exact(self.k)
    }
}
