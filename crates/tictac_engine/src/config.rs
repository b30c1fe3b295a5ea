use std::time::Duration;

pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(250); // Keeps a turn responsive

/// Knobs for the alpha-beta strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub time_budget: Duration,
    /// Fixed depth ceiling. `None` picks one from the board size.
    pub max_depth: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    pub fn new(time_budget: Duration, max_depth: Option<u8>) -> Self {
        Self {
            time_budget,
            max_depth,
        }
    }

    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Depth to search on an N×N board, never below one ply.
    pub fn depth_for(&self, n: usize) -> u8 {
        self.max_depth.unwrap_or_else(|| default_depth(n)).max(1)
    }
}

/// Smaller boards branch less, so they can be searched deeper.
pub fn default_depth(n: usize) -> u8 {
    match n {
        0..=3 => 9, // Whole game tree on 3x3
        4 => 6,
        5 => 4,
        _ => 3, // Branching above 35 cells
    }
}
