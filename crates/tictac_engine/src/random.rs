use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform pick from `moves`, or `None` when there is nothing to pick.
pub fn pick_random(moves: &[usize]) -> Option<usize> {
    pick_random_with(&mut rand::thread_rng(), moves)
}

pub fn pick_random_with<R: Rng + ?Sized>(rng: &mut R, moves: &[usize]) -> Option<usize> {
    moves.choose(rng).copied()
}
