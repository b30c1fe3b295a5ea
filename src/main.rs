use std::env;
use std::error::Error;

use tictac_core::Mark;
use tictac_engine::{play_game, play_many, ComputerPlayer, SearchConfig, Strategy};

// Self-play demo: `tictac [n] [k] [games] [x-strategy] [o-strategy]`
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let n: usize = args.first().map(|s| s.parse()).transpose()?.unwrap_or(3);
    let k: usize = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(n.min(4));
    let games: usize = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(20);
    let x_strategy: Strategy = args
        .get(3)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(Strategy::AlphaBeta(SearchConfig::default()));
    let o_strategy: Strategy = args
        .get(4)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(Strategy::Random);

    println!("{}x{} board, {} in a row: X={} vs O={}", n, n, k, x_strategy, o_strategy);

    let mut x = ComputerPlayer::new(x_strategy);
    let mut o = ComputerPlayer::new(o_strategy);
    let sample = play_game(n, k, &mut x, &mut o, Mark::X)?;
    println!("\n{}\n", sample.board);
    println!("Sample game: {:?} after {} moves", sample.outcome, sample.moves.len());

    let summary = play_many(
        n,
        k,
        games,
        |_| ComputerPlayer::new(x_strategy),
        |_| ComputerPlayer::new(o_strategy),
    )?;
    println!(
        "{} games: X won {}, O won {}, {} drawn ({:.1} moves per game)",
        summary.games(),
        summary.x_wins,
        summary.o_wins,
        summary.draws,
        summary.total_moves as f64 / summary.games().max(1) as f64
    );

    Ok(())
}
