// Timing, board access and the evaluation used at the leaves
use std::time::Duration;

use tictac_core::{Board, GameStatus, Mark, Position};

use crate::clock::{Clock, SystemClock, TimeManager};
use crate::config::SearchConfig;
use crate::evaluation::{evaluate, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

/// What a search settled on and what it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Option<usize>,
    /// Score of `best_move`, absent when no root move was searched.
    pub score: Option<i64>,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
    pub timed_out: bool,
}

/// Picks the best of `moves` for `me` with a wall-clock budget.
pub fn pick_best(
    board: &Board,
    moves: &[usize],
    me: Mark,
    opponent: Mark,
    config: &SearchConfig,
) -> Option<usize> {
    let clock = SystemClock::start();
    pick_best_with_clock(board, moves, me, opponent, config, &clock)
}

pub fn pick_best_with_clock(
    board: &Board,
    moves: &[usize],
    me: Mark,
    opponent: Mark,
    config: &SearchConfig,
    clock: &dyn Clock,
) -> Option<usize> {
    search_best_move(board, moves, me, opponent, config, clock).best_move
}

/// Fixed-depth alpha-beta over the candidate `moves`, checked against the
/// clock at every node.
///
/// Root moves are tried center-first, each on its own copy of the board.
/// Below the root a single scratch board is mutated and restored. When the
/// budget runs out the remaining root moves are skipped and the best move so
/// far is kept; the first ordered move stands if nothing was searched.
pub fn search_best_move(
    board: &Board,
    moves: &[usize],
    me: Mark,
    opponent: Mark,
    config: &SearchConfig,
    clock: &dyn Clock,
) -> SearchReport {
    let n = board.size();
    let depth = config.depth_for(n);

    let legal: Vec<usize> = moves
        .iter()
        .copied()
        .filter(|&idx| idx < n * n && board.get(idx).is_none())
        .collect();
    if legal.len() != moves.len() {
        log::warn!(
            "ignoring {} occupied or off-board candidates",
            moves.len() - legal.len()
        );
    }

    let ordered = order_by_center(&legal, n);
    let mut searcher = Searcher {
        me,
        opponent,
        time: TimeManager::new(clock, config.time_budget),
        nodes: 0,
        timed_out: false,
    };

    let mut best_move = ordered.first().copied();
    let mut best_score: Option<i64> = None;

    for &mv in &ordered {
        if searcher.time.is_expired() {
            searcher.timed_out = true;
            break;
        }

        let mut scratch = board.clone();
        scratch.apply_move(mv, me);
        let score = searcher.alphabeta(&mut scratch, depth - 1, i64::MIN, i64::MAX, false);
        log::trace!("root move {} scored {}", mv, score);

        if best_score.map_or(true, |best| score > best) {
            best_score = Some(score);
            best_move = Some(mv);
        }
    }

    let report = SearchReport {
        best_move,
        score: best_score,
        depth,
        nodes: searcher.nodes,
        elapsed: searcher.time.elapsed(),
        timed_out: searcher.timed_out,
    };
    log::debug!(
        "search for {}: move {:?} score {:?} depth {} nodes {} in {:?}{}",
        me,
        report.best_move,
        report.score,
        report.depth,
        report.nodes,
        report.elapsed,
        if report.timed_out { " (timed out)" } else { "" }
    );
    report
}

/// Sorts cell indices by distance to the board center, nearest first.
/// Equally distant cells keep their relative order.
pub fn order_by_center(moves: &[usize], n: usize) -> Vec<usize> {
    let mut ordered = moves.to_vec();
    ordered.sort_by_key(|&idx| Position::from_index(idx, n).center_distance2(n));
    ordered
}

struct Searcher<'a> {
    me: Mark,
    opponent: Mark,
    time: TimeManager<'a>,
    nodes: u64,
    timed_out: bool,
}

impl Searcher<'_> {
    /// Heuristic value kept strictly inside the terminal scores, so a forced
    /// result always outranks line-building however long K is.
    fn leaf_score(&self, board: &Board) -> i64 {
        evaluate(board, self.me, self.opponent).clamp(LOSS_SCORE + 1, WIN_SCORE - 1)
    }

    fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> i64 {
        self.nodes += 1;

        // Time first, so an expired budget costs at most one evaluation
        if self.timed_out || self.time.is_expired() {
            self.timed_out = true;
            return self.leaf_score(board);
        }

        match board.outcome() {
            GameStatus::Won(mark) if mark == self.me => return WIN_SCORE,
            GameStatus::Won(_) => return LOSS_SCORE,
            GameStatus::Draw => return DRAW_SCORE,
            GameStatus::InProgress => {}
        }

        if depth == 0 {
            return self.leaf_score(board);
        }

        let moves = order_by_center(&board.available_moves(), board.size());
        let mark = if maximizing { self.me } else { self.opponent };
        let mut value = if maximizing { i64::MIN } else { i64::MAX };

        for mv in moves {
            board.apply_move(mv, mark);
            let score = self.alphabeta(board, depth - 1, alpha, beta, !maximizing);
            board.undo_move(mv);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if beta <= alpha || self.timed_out {
                break;
            }
        }

        value
    }
}
