use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tictac_core::{Board, GameStatus, Mark};

fn complete_lines(board: &Board, mark: Mark) -> usize {
    board
        .lines()
        .iter()
        .filter(|segment| segment.iter().all(|&idx| board.get(idx) == Some(mark)))
        .count()
}

/// Walk every position reachable by legal alternating play from `board`.
fn visit_reachable(board: &mut Board, to_move: Mark, finished: &mut usize) {
    let x_lines = complete_lines(board, Mark::X);
    let o_lines = complete_lines(board, Mark::O);
    assert!(
        x_lines == 0 || o_lines == 0,
        "both marks complete a line:\n{}",
        board
    );
    match board.winner() {
        Some(Mark::X) => assert!(x_lines > 0),
        Some(Mark::O) => assert!(o_lines > 0),
        None => assert_eq!(x_lines + o_lines, 0),
    }

    if board.outcome().is_over() {
        *finished += 1;
        return;
    }
    for idx in board.available_moves() {
        assert!(board.apply_move(idx, to_move));
        visit_reachable(board, to_move.opponent(), finished);
        assert!(board.undo_move(idx));
    }
}

#[test]
fn test_win_detection_is_mutually_exclusive_on_3x3() {
    let mut board = Board::new(3, 3).unwrap();
    let mut finished = 0;
    visit_reachable(&mut board, Mark::X, &mut finished);
    // Distinct move sequences that end a 3x3 game
    assert_eq!(finished, 255_168);
    assert_eq!(board, Board::new(3, 3).unwrap());
}

#[test]
fn test_available_moves_shrink_by_one_per_move() {
    for n in 3..=7 {
        for k in 3..=n {
            let mut board = Board::new(n, k).unwrap();
            assert_eq!(board.available_moves().len(), n * n);

            let mut mark = Mark::X;
            let mut expected = n * n;
            for idx in (0..n * n).rev().step_by(2) {
                assert!(board.apply_move(idx, mark));
                expected -= 1;
                let moves = board.available_moves();
                assert_eq!(moves.len(), expected);
                assert!(!moves.contains(&idx));
                assert!(moves.windows(2).all(|w| w[0] < w[1]));
                mark = mark.opponent();
            }
        }
    }
}

#[test]
fn test_winner_independent_of_move_order() {
    let placements = [
        (1, Mark::X),
        (0, Mark::O),
        (5, Mark::X),
        (4, Mark::O),
        (10, Mark::X),
        (12, Mark::O),
        (15, Mark::X),
        (2, Mark::O),
    ];
    let mut rng = StdRng::seed_from_u64(7);

    let mut reference = Board::new(4, 3).unwrap();
    for &(idx, mark) in &placements {
        reference.apply_move(idx, mark);
    }
    let expected = reference.winner();
    // 5, 10, 15 is a down-right diagonal for X on 4x4
    assert_eq!(expected, Some(Mark::X));

    for _ in 0..50 {
        let mut order = placements.to_vec();
        order.shuffle(&mut rng);
        let mut board = Board::new(4, 3).unwrap();
        for (idx, mark) in order {
            assert!(board.apply_move(idx, mark));
        }
        assert_eq!(board, reference);
        assert_eq!(board.winner(), expected);
    }
}

#[test]
fn test_rejected_moves_never_mutate() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut board = Board::new(5, 4).unwrap();
    let mut mark = Mark::O;

    while board.outcome() == GameStatus::InProgress {
        let moves = board.available_moves();
        let &idx = moves.choose(&mut rng).unwrap();
        assert!(board.apply_move(idx, mark));

        let snapshot = board.clone();
        assert!(!board.apply_move(idx, mark.opponent()));
        assert!(!board.apply_move(25, mark));
        assert_eq!(board, snapshot);

        mark = mark.opponent();
    }
}
