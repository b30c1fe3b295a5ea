use tictac_core::{Board, Mark};

// Terminal scores. The search clamps heuristic leaves strictly inside them.
pub const WIN_SCORE: i64 = 1_000_000;   // `me` completed a line
pub const LOSS_SCORE: i64 = -WIN_SCORE; // Opponent completed a line
pub const DRAW_SCORE: i64 = 0;          // Full board, no line

// Weight of a segment holding `count` marks of one side only: 1, 10, 100, ...
const LINE_BASE: i64 = 10; // Each extra mark is worth ten times the last

/// Scores a position by line-completion potential from `me`'s side.
///
/// Every length-K segment is inspected once. Segments holding marks of both
/// players are dead and score nothing, as do empty ones. A segment holding
/// only `me`'s marks adds `10^(count - 1)`; one holding only `opponent`'s
/// marks subtracts the same. Because dead segments are worth zero to both
/// sides, swapping `me` and `opponent` negates the result exactly.
pub fn evaluate(board: &Board, me: Mark, opponent: Mark) -> i64 {
    board
        .lines()
        .iter()
        .map(|segment| segment_score(board, segment, me, opponent))
        .fold(0i64, i64::saturating_add)
}

fn segment_score(board: &Board, segment: &[usize], me: Mark, opponent: Mark) -> i64 {
    let mut mine = 0u32;
    let mut theirs = 0u32;
    for &idx in segment {
        match board.get(idx) {
            Some(mark) if mark == me => mine += 1,
            Some(mark) if mark == opponent => theirs += 1,
            _ => {}
        }
    }

    match (mine, theirs) {
        (0, 0) => 0,
        (m, 0) => LINE_BASE.saturating_pow(m - 1),
        (0, o) => -LINE_BASE.saturating_pow(o - 1),
        _ => 0,
    }
}
