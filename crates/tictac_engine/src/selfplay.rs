use rayon::prelude::*;
use tictac_core::{Board, GameStatus, Mark, Move};

use crate::ai::{ComputerPlayer, Player};
use crate::error::EngineError;

/// A finished game: every move in order and the final position.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: GameStatus,
    pub board: Board,
}

/// Tally of finished games between the `X` and `O` players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn record(&mut self, game: &GameRecord) {
        match game.outcome {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
        self.total_moves += game.moves.len();
    }

    pub fn merge(mut self, other: MatchSummary) -> MatchSummary {
        self.x_wins += other.x_wins;
        self.o_wins += other.o_wins;
        self.draws += other.draws;
        self.total_moves += other.total_moves;
        self
    }
}

/// Plays one game on a fresh N×N board until it is won or drawn.
pub fn play_game(
    n: usize,
    k: usize,
    x: &mut dyn Player,
    o: &mut dyn Player,
    starter: Mark,
) -> Result<GameRecord, EngineError> {
    let mut board = Board::new(n, k)?;
    let mut moves = Vec::with_capacity(n * n);
    let mut to_move = starter;

    while !board.outcome().is_over() {
        let player: &mut dyn Player = match to_move {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let index = player
            .choose_move(&board, to_move)
            .ok_or(EngineError::NoMoveAvailable)?;
        if !board.apply_move(index, to_move) {
            return Err(EngineError::IllegalMove {
                index,
                legal: board.available_moves(),
            });
        }
        moves.push(Move::new(index, to_move));
        to_move = to_move.opponent();
    }

    let outcome = board.outcome();
    log::info!(
        "{}x{} (k={}) game over after {} moves: {:?}",
        n,
        n,
        k,
        moves.len(),
        outcome
    );
    Ok(GameRecord {
        moves,
        outcome,
        board,
    })
}

/// Plays `games` independent games in parallel and tallies the results.
///
/// Game `i` uses players built by `make_x(i)` and `make_o(i)`; `X` opens the
/// even-numbered games and `O` the odd ones.
pub fn play_many<FX, FO>(
    n: usize,
    k: usize,
    games: usize,
    make_x: FX,
    make_o: FO,
) -> Result<MatchSummary, EngineError>
where
    FX: Fn(usize) -> ComputerPlayer + Sync,
    FO: Fn(usize) -> ComputerPlayer + Sync,
{
    (0..games)
        .into_par_iter()
        .map(|i| -> Result<MatchSummary, EngineError> {
            let mut x = make_x(i);
            let mut o = make_o(i);
            let starter = if i % 2 == 0 { Mark::X } else { Mark::O };
            let game = play_game(n, k, &mut x, &mut o, starter)?;

            let mut summary = MatchSummary::default();
            summary.record(&game);
            Ok(summary)
        })
        .try_reduce(MatchSummary::default, |a, b| Ok(a.merge(b)))
}
