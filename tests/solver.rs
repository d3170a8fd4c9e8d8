//! End-to-end solver properties, driven through the library API.

use bislide::puzzle::{parse_board, Board, Direction};
use bislide::search::{solve, SearchConfig, SolveOutcome};

/// Apply a move sequence to a board, one blank slide at a time.
fn replay(start: &Board, moves: &[Direction]) -> Board {
    let mut current = start.clone();
    for &dir in moves {
        current = current.shifted(dir).expect("move must stay on the board");
    }
    current
}

/// Walk a deterministic scramble away from the goal, then rebuild the result
/// as a fresh start board with an empty path.
fn scrambled(height: usize, width: usize, steps: usize) -> Board {
    let cycle = [
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
        Direction::South,
    ];
    let mut board = Board::goal_of(height, width);
    let mut taken = 0;
    let mut i = 0;
    while taken < steps {
        if let Some(next) = board.shifted(cycle[i % cycle.len()]) {
            board = next;
            taken += 1;
        }
        i += 1;
    }
    Board::from_tiles(board.tiles().to_vec(), height, width).unwrap()
}

#[test]
fn two_by_two_solves_with_a_single_east_move() {
    let start = parse_board("2\n1 2\n0 3\n").unwrap();
    let report = solve(&start, &SearchConfig::default());

    let solution = report.solution().expect("solvable");
    assert_eq!(solution.len(), 1);
    assert_eq!(solution.moves, vec![Direction::East]);
    assert_eq!(
        solution.forward.len() + solution.backward.len(),
        solution.len()
    );
    assert_eq!(replay(&start, &solution.moves), Board::goal_of(2, 2));
}

#[test]
fn start_equal_to_goal_needs_no_moves_and_no_expansion() {
    let start = Board::goal_of(3, 3);
    let report = solve(&start, &SearchConfig::default());

    let solution = report.solution().expect("solvable");
    assert!(solution.is_empty());
    assert_eq!(report.statistics.total_expanded(), 0);
}

#[test]
fn two_by_two_transposed_pair_exhausts_as_unsolvable() {
    // Tiles 1 and 2 swapped relative to the goal, blank fixed: the whole
    // reachable component gets explored without a meeting.
    let start = parse_board("2\n2 1\n3 0\n").unwrap();
    let report = solve(&start, &SearchConfig::default());

    assert_eq!(report.outcome, SolveOutcome::Unsolvable);
    assert!(report.statistics.expanded_forward > 0 || report.statistics.expanded_backward > 0);
}

#[test]
fn three_by_three_transposed_pair_reports_unsolvable() {
    let start = parse_board("3\n2 1 3\n4 5 6\n7 8 0\n").unwrap();
    assert!(!start.is_solvable());

    // A budget keeps the run short; the verdict is the same either way.
    let config = SearchConfig::default().with_max_steps(50_000);
    let report = solve(&start, &config);
    assert_eq!(report.outcome, SolveOutcome::Unsolvable);
}

#[test]
fn assembled_path_replays_to_the_goal() {
    for steps in [2, 6, 10, 14] {
        let start = scrambled(3, 3, steps);
        let report = solve(&start, &SearchConfig::default());

        let solution = report
            .solution()
            .unwrap_or_else(|| panic!("scramble of {steps} moves must stay solvable"));
        assert_eq!(
            replay(&start, &solution.moves),
            Board::goal_of(3, 3),
            "replaying the assembled path must reach the goal (scramble {steps})"
        );
    }
}

#[test]
fn rectangular_boards_are_supported() {
    let start = scrambled(2, 4, 8);
    let report = solve(&start, &SearchConfig::default());

    let solution = report.solution().expect("solvable");
    assert_eq!(replay(&start, &solution.moves), Board::goal_of(2, 4));
}

#[test]
fn repeated_runs_agree_on_total_length() {
    let start = scrambled(3, 3, 8);

    let first = solve(&start, &SearchConfig::default());
    let second = solve(&start, &SearchConfig::default());

    let a = first.solution().expect("solvable").len();
    let b = second.solution().expect("solvable").len();
    assert_eq!(a, b, "total length must not depend on worker interleaving");
}

#[test]
fn backward_segment_joins_continuously() {
    // The meeting state reached by the forward partial path must equal the
    // state reached by the backward partial path from the goal.
    let start = scrambled(3, 3, 10);
    let report = solve(&start, &SearchConfig::default());
    let solution = report.solution().expect("solvable");

    let via_forward = replay(&start, &solution.forward);
    let via_backward = replay(&Board::goal_of(3, 3), &solution.backward);
    assert_eq!(via_forward, via_backward);
}
